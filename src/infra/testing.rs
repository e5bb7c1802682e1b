use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    core::{Label, Weight},
    graph::Graph,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex {0} is present more than once")]
    DuplicateVertex(String),
    #[error("edges of vertex {0} are stored although it has none")]
    EmptyAdjacency(String),
    #[error("edge {edge} is stored under vertex {key}")]
    MisplacedEdge { edge: String, key: String },
    #[error("edge {edge} references absent vertex {vertex}")]
    AbsentEndpoint { edge: String, vertex: String },
}

/// Checks the invariants of the graph representation.
///
/// Returns the first violation found.
pub fn check_consistency<V, W>(graph: &Graph<V, W>) -> Result<(), ConsistencyCheckError>
where
    V: Label,
    W: Weight,
{
    let mut vertices = FxHashSet::default();

    for vertex in graph.vertices_iter() {
        if !vertices.insert(vertex) {
            return Err(ConsistencyCheckError::DuplicateVertex(format!(
                "{vertex:?}"
            )));
        }
    }

    for (key, edges) in graph.adjacency() {
        if edges.is_empty() {
            return Err(ConsistencyCheckError::EmptyAdjacency(format!("{key:?}")));
        }

        for edge in edges {
            let describe = || format!("{:?} -> {:?}", edge.from, edge.to);

            if &edge.from != key {
                return Err(ConsistencyCheckError::MisplacedEdge {
                    edge: describe(),
                    key: format!("{key:?}"),
                });
            }

            for endpoint in [&edge.from, &edge.to] {
                if !vertices.contains(endpoint) {
                    return Err(ConsistencyCheckError::AbsentEndpoint {
                        edge: describe(),
                        vertex: format!("{endpoint:?}"),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_after_mutations() {
        let mut graph = Graph::new();

        for v in 0..5 {
            graph.add_vertex(v);
        }

        graph.add_undirected_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 2.0);
        graph.add_edge(2, 2, 0.5);
        graph.add_edge(3, 4, 1.5);
        check_consistency(&graph).unwrap();

        graph.remove_vertex(&2);
        check_consistency(&graph).unwrap();

        graph.remove_edge(&3, &4);
        check_consistency(&graph).unwrap();

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn error_display() {
        let error = ConsistencyCheckError::AbsentEndpoint {
            edge: "1 -> 2".to_string(),
            vertex: "2".to_string(),
        };
        assert_eq!(error.to_string(), "edge 1 -> 2 references absent vertex 2");
    }
}
