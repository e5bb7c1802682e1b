use proptest::{
    collection::vec,
    strategy::{Just, Strategy},
};

use crate::{core::Weight, graph::Graph};

/// Shape of the generated graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    max_size: usize,
    undirected: bool,
    allow_loops: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 16,
            undirected: false,
            allow_loops: false,
        }
    }
}

impl StrategyParams {
    /// Maximum number of vertices. The number of edges is bounded by twice
    /// that.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            max_size: max_size.min(u16::MAX as usize),
            ..self
        }
    }

    /// Every generated edge is added in both directions.
    pub fn undirected(self) -> Self {
        Self {
            undirected: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }
}

/// Generates graphs with vertices `0..n` and edge distances drawn from
/// `weight`.
pub fn graph<S>(weight: S, params: StrategyParams) -> impl Strategy<Value = Graph<u16, S::Value>>
where
    S: Strategy + Clone,
    S::Value: Weight,
{
    (0..=params.max_size)
        .prop_flat_map(move |order| {
            // The ranges must not be empty even if there are no vertices, the
            // edge list is empty in that case anyway.
            let bound = order.max(1) as u16;
            let max_edges = order * 2;

            (Just(order), vec((0..bound, 0..bound, weight.clone()), 0..=max_edges))
        })
        .prop_map(move |(order, edges)| {
            let mut graph = Graph::new();

            for v in 0..order as u16 {
                graph.add_vertex(v);
            }

            for (from, to, distance) in edges {
                if from == to && !params.allow_loops {
                    continue;
                }

                if params.undirected {
                    graph.add_undirected_edge(from, to, distance);
                } else {
                    graph.add_edge(from, to, distance);
                }
            }

            graph
        })
}

pub fn graph_directed<S>(weight: S) -> impl Strategy<Value = Graph<u16, S::Value>>
where
    S: Strategy + Clone,
    S::Value: Weight,
{
    graph(weight, StrategyParams::default())
}

pub fn graph_undirected<S>(weight: S) -> impl Strategy<Value = Graph<u16, S::Value>>
where
    S: Strategy + Clone,
    S::Value: Weight,
{
    graph(weight, StrategyParams::default().undirected())
}
