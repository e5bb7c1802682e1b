//! Directed graph container keyed by vertex labels.
//!
//! [`Graph`] stores vertices identified by arbitrary labels and directed,
//! weighted edges between them. On top of that the crate provides
//!
//! * [shortest paths](algo::shortest_paths) using Dijkstra's algorithm,
//! * a [strong connectivity test](algo::connected),
//! * depth-first [traversal](visit),
//! * [placement analytics](algo::placement) choosing a hub or the most remote
//!   vertex.
//!
//! # Examples
//!
//! ```
//! use labelgraph::Graph;
//!
//! let mut graph = Graph::new();
//!
//! for depot in ["north", "center", "south"] {
//!     graph.add_vertex(depot);
//! }
//!
//! graph.add_undirected_edge("north", "center", 4.0);
//! graph.add_undirected_edge("center", "south", 3.0);
//!
//! assert!(graph.is_connected());
//! assert_eq!(graph.find_optimal_warehouse(), Ok("center"));
//! assert_eq!(graph.find_most_remote_clinic(), Ok("north"));
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

#[doc(inline)]
pub use crate::{core::Edge, graph::Graph};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::visit::{VisitSet, Visitor};
}
