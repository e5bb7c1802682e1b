//! Strong connectivity test.

use tracing::debug;

use crate::{
    core::{Label, Weight},
    graph::Graph,
    visit::{Dfs, VisitSet, Visitor},
};

/// Tests whether every vertex of the graph is reachable from every other
/// vertex along directed edges.
///
/// Runs a depth-first traversal from the first vertex and, if it reaches
/// everything, a second one from the same vertex in the transposed graph. An
/// empty graph is connected.
///
/// This only answers the yes/no question. It does not label strongly connected
/// components.
pub fn is_connected<V, W>(graph: &Graph<V, W>) -> bool
where
    V: Label,
    W: Weight,
{
    let Some(start) = graph.vertices_iter().next() else {
        // Empty graph trivially connected.
        return true;
    };

    let order = graph.order();

    let mut forward = Dfs::new();
    for _ in forward.start(start.clone()).iter(graph) {}

    if forward.visited().visited_count() < order {
        debug!(
            ?start,
            visited = forward.visited().visited_count(),
            order,
            "not all vertices reachable from start"
        );
        return false;
    }

    // Backwards pass.
    let transposed = graph.transposed();
    let mut backward = Dfs::new();
    for _ in backward.start(start.clone()).iter(&transposed) {}

    let connected = backward.visited().visited_count() == order;
    if !connected {
        debug!(
            ?start,
            visited = backward.visited().visited_count(),
            order,
            "start not reachable from all vertices"
        );
    }

    connected
}
