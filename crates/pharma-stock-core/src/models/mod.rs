//! Domain models for the inventory decision engine.

mod alert;
mod medicine;
mod recommendation;

pub use alert::*;
pub use medicine::*;
pub use recommendation::*;
