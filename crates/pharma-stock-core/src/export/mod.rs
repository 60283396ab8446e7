//! Export functionality for stock reports.

mod report;

pub use report::*;
