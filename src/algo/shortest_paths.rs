//! Find [single source shortest paths] and their distances in a graph.
//!
//! Edge distances must not be negative. If you have a graph where nonnegative
//! distances can be guaranteed at compile time, use an unsigned type like `u32`
//! and the up-front check for negative edges is skipped.
//!
//! Path lengths are accumulated in the distance type itself. Integer types
//! must be wide enough for the longest shortest path, otherwise the addition
//! overflows (and panics in debug builds). Float types never overflow.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use labelgraph::{algo::ShortestPaths, Graph};
//!
//! let mut graph = Graph::new();
//!
//! for city in ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg", "Florence", "Rome"] {
//!     graph.add_vertex(city);
//! }
//!
//! for (from, to, distance) in [
//!     ("Prague", "Bratislava", 328u32),
//!     ("Prague", "Nuremberg", 297),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Nuremberg", "Munich", 170),
//!     ("Vienna", "Munich", 402),
//!     ("Vienna", "Florence", 863),
//!     ("Munich", "Florence", 646),
//!     ("Florence", "Rome", 278),
//! ] {
//!     graph.add_undirected_edge(from, to, distance);
//! }
//!
//! let shortest_paths = ShortestPaths::on(&graph).run("Prague").unwrap();
//! let route = shortest_paths
//!     .path_to(&"Rome")
//!     .iter()
//!     .map(|edge| edge.to)
//!     .collect::<Vec<_>>()
//!     .join(" - ");
//!
//! assert_eq!(shortest_paths.dist(&"Rome"), Some(&1391));
//! assert_eq!(route, "Nuremberg - Munich - Florence - Rome");
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    core::{Edge, Label, Weight},
    graph::Graph,
};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<V, W> {
    source: V,
    // Every vertex of the graph has an entry, unreachable ones hold
    // `Weight::inf`.
    dist: FxHashMap<V, W>,
    pred: FxHashMap<V, Edge<V, W>>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Label,
    W: Weight,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not reachable.
    pub fn dist(&self, to: &V) -> Option<&W> {
        self.dist.get(to).filter(|dist| **dist != W::inf())
    }

    /// Iterates over all reachable vertices (including the source) and their
    /// distances, in no particular order.
    pub fn reachable(&self) -> impl Iterator<Item = (&V, &W)> + '_ {
        let inf = W::inf();
        self.dist.iter().filter(move |(_, dist)| **dist != inf)
    }

    /// Returns the edges on the path from the source to the given vertex, in
    /// this order. The path is empty if the vertex is not reachable or if it
    /// is the source itself.
    pub fn path_to(&self, to: &V) -> Vec<Edge<V, W>> {
        if self.dist(to).is_none() {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = to;

        while current != &self.source {
            match self.pred.get(current) {
                Some(edge) => {
                    path.push(edge.clone());
                    current = &edge.from;
                }
                // Reachable vertices always have a predecessor chain back to
                // the source.
                None => return Vec::new(),
            }
        }

        path.reverse();
        path
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,
}

/// Scans all edges of the graph for a negative distance.
pub(crate) fn check_nonnegative<V, W>(graph: &Graph<V, W>) -> Result<(), Error>
where
    V: Label,
    W: Weight,
{
    if W::is_unsigned() {
        return Ok(());
    }

    match graph.all_edges().find(|edge| edge.distance < W::zero()) {
        Some(edge) => {
            debug!(from = ?edge.from, to = ?edge.to, "negative edge distance");
            Err(Error::NegativeWeight)
        }
        None => Ok(()),
    }
}
