//! Cost Search
//!
//! Generic weighted shortest-path search over a directed graph, independent of
//! any inventory or pharmacy concept.
//!
//! # Modules
//!
//! - [`graph`]: Directed adjacency map with non-negative edge costs
//! - [`heuristic`]: Pluggable cost-to-goal estimates
//! - [`astar`]: A* search with deterministic tie-breaking
//!
//! # Example
//!
//! ```
//! use cost_search::{astar, AbsoluteDifference, Graph};
//!
//! let graph = Graph::from_json(r#"{"0": {"1": 1, "2": 4}, "1": {"2": 2, "3": 5}, "2": {"3": 1}, "3": {}}"#)
//!     .unwrap();
//! let path = astar(&graph, 0, 3, &AbsoluteDifference).unwrap();
//! assert_eq!(path.nodes, vec![0, 1, 2, 3]);
//! assert_eq!(path.cost, 4.0);
//! ```

pub mod astar;
pub mod graph;
pub mod heuristic;

pub use astar::{astar, path_cost, Path};
pub use graph::{Graph, GraphError, GraphResult};
pub use heuristic::{AbsoluteDifference, Heuristic, NoHeuristic};
