use crate::{
    core::{Label, Weight},
    graph::Graph,
};

use super::{dijkstra::dijkstra, Error, ShortestPaths};

/// Builder for [`ShortestPaths`].
pub struct ShortestPathsBuilder<'a, V, W> {
    graph: &'a Graph<V, W>,
    goal: Option<V>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Label,
    W: Weight,
{
    /// Starts configuring the algorithm on given graph.
    pub fn on(graph: &Graph<V, W>) -> ShortestPathsBuilder<'_, V, W> {
        ShortestPathsBuilder { graph, goal: None }
    }
}

impl<'a, V, W> ShortestPathsBuilder<'a, V, W>
where
    V: Label,
    W: Weight,
{
    /// Stops the search as soon as the distance to `goal` is final.
    ///
    /// Distances of vertices other than the goal may then be tentative or
    /// unknown.
    pub fn goal(self, goal: V) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    /// Runs the algorithm from `source`.
    pub fn run(self, source: V) -> Result<ShortestPaths<V, W>, Error> {
        let ShortestPathsBuilder { graph, goal } = self;
        dijkstra(graph, source, goal)
    }
}
