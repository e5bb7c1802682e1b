//! Choosing a vertex by the distances around it.
//!
//! Two selection criteria are available:
//!
//! * [`find_optimal_warehouse`] picks the hub, the vertex with the smallest
//!   mean shortest-path distance to the vertices it can reach,
//! * [`find_most_remote_clinic`] picks the vertex whose directly incident edges
//!   are the longest on average.
//!
//! Both scan vertices in insertion order and keep the first one on ties.

use thiserror::Error;
use tracing::debug;

use crate::{
    core::{Label, Weight},
    graph::Graph,
};

use super::shortest_paths::{self, ShortestPaths};

/// The error encountered during a vertex selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// There is no vertex to choose from.
    #[error("graph is empty")]
    EmptyGraph,

    /// Computing distances failed.
    #[error(transparent)]
    ShortestPaths(#[from] shortest_paths::Error),
}

/// Returns the mean shortest-path distance from `from` to every vertex it can
/// reach.
///
/// The vertex itself counts as reachable with zero distance and is part of the
/// mean. A vertex that is not in the graph therefore has zero mean.
///
/// The distances are summed up in a wider type, so only every single path
/// length needs to fit into `W`, see [`Graph::shortest_path`].
///
/// Fails if the graph contains an edge with negative distance.
pub fn average_distance<V, W>(graph: &Graph<V, W>, from: &V) -> Result<W, Error>
where
    V: Label,
    W: Weight,
{
    let paths = ShortestPaths::on(graph).run(from.clone())?;
    Ok(W::mean(paths.reachable().map(|(_, dist)| dist.clone())))
}

/// Returns the vertex with the smallest [average
/// distance](average_distance).
pub fn find_optimal_warehouse<V, W>(graph: &Graph<V, W>) -> Result<V, Error>
where
    V: Label,
    W: Weight,
{
    let mut vertices = graph.vertices_iter();
    let mut optimal = vertices.next().ok_or(Error::EmptyGraph)?;
    let mut min_avg = average_distance(graph, optimal)?;

    for vertex in vertices {
        let avg = average_distance(graph, vertex)?;

        if avg < min_avg {
            min_avg = avg;
            optimal = vertex;
        }
    }

    debug!(vertex = ?optimal, "optimal warehouse found");
    Ok(optimal.clone())
}

/// Returns the mean distance of all edges going from or to the vertex.
///
/// A loop on the vertex is counted twice, once as outgoing and once as
/// incoming. Returns zero if there are no such edges.
pub fn average_edge_length<V, W>(graph: &Graph<V, W>, vertex: &V) -> f64
where
    V: Label,
    W: Weight,
{
    let outgoing = graph.outgoing(vertex).iter();
    let incoming = graph.all_edges().filter(|edge| &edge.to == vertex);

    let (sum, count) = outgoing
        .chain(incoming)
        .fold((0f64, 0usize), |(sum, count), edge| {
            (sum + edge.distance.to_f64(), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    sum / count as f64
}

/// Returns the vertex with the largest [average edge
/// length](average_edge_length).
pub fn find_most_remote_clinic<V, W>(graph: &Graph<V, W>) -> Result<V, Error>
where
    V: Label,
    W: Weight,
{
    let mut vertices = graph.vertices_iter();
    let mut remote = vertices.next().ok_or(Error::EmptyGraph)?;
    let mut max_avg = average_edge_length(graph, remote);

    for vertex in vertices {
        let avg = average_edge_length(graph, vertex);

        if avg > max_avg {
            max_avg = avg;
            remote = vertex;
        }
    }

    debug!(vertex = ?remote, average = max_avg, "most remote clinic found");
    Ok(remote.clone())
}
