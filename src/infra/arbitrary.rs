use arbitrary::Arbitrary;

use crate::{
    core::{AddEdgeError, Edge, Label, Weight},
    graph::Graph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Mutation of a graph generated by a fuzzer.
#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, W> {
    AddVertex(V),
    RemoveVertex(V),
    AddEdge(V, V, W),
    AddUndirectedEdge(V, V, W),
    RemoveEdge(V, V),
    // Removes one of the outgoing edges of the vertex by its exact value.
    RemoveEdgeExact(V, Index),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutOpResult<V, W> {
    AddVertex(bool),
    RemoveVertex(bool),
    AddEdge(Result<(), AddEdgeError<V, W>>),
    AddUndirectedEdge(Result<(), AddEdgeError<V, W>>),
    RemoveEdge(bool),
    RemoveEdgeExact(bool),
}

impl<V, W> MutOp<V, W>
where
    V: Label,
    W: Weight,
{
    pub fn apply(self, graph: &mut Graph<V, W>) -> MutOpResult<V, W> {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::RemoveVertex(vertex) => MutOpResult::RemoveVertex(graph.remove_vertex(&vertex)),
            MutOp::AddEdge(from, to, distance) => {
                MutOpResult::AddEdge(graph.try_add_edge(from, to, distance))
            }
            MutOp::AddUndirectedEdge(v1, v2, distance) => {
                MutOpResult::AddUndirectedEdge(graph.try_add_undirected_edge(v1, v2, distance))
            }
            MutOp::RemoveEdge(from, to) => MutOpResult::RemoveEdge(graph.remove_edge(&from, &to)),
            MutOp::RemoveEdgeExact(from, index) => {
                let outgoing = graph.outgoing(&from);
                let edge: Option<Edge<V, W>> = index
                    .get(outgoing.len())
                    .map(|i| outgoing[i].clone());

                let removed = match edge {
                    Some(edge) => graph.remove_edge_exact(&edge),
                    None => false,
                };

                MutOpResult::RemoveEdgeExact(removed)
            }
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub struct MutOpsSeq<V, W>(pub Vec<MutOp<V, W>>);

impl<V, W> IntoIterator for MutOpsSeq<V, W> {
    type Item = MutOp<V, W>;
    type IntoIter = std::vec::IntoIter<MutOp<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;

    use crate::infra::testing::check_consistency;

    use super::*;

    #[test]
    fn apply_sequence() {
        let ops = vec![
            MutOp::AddVertex(1u8),
            MutOp::AddVertex(2),
            MutOp::AddVertex(2),
            MutOp::AddEdge(1, 2, 3.0f32),
            MutOp::AddEdge(1, 7, 1.0),
            MutOp::AddUndirectedEdge(2, 1, 3.0),
            MutOp::RemoveEdgeExact(1, Index(5)),
            MutOp::RemoveEdge(2, 1),
            MutOp::RemoveVertex(3),
        ];

        let mut graph = Graph::new();
        let results = MutOpsSeq(ops)
            .into_iter()
            .map(|op| op.apply(&mut graph))
            .collect::<Vec<_>>();

        assert_eq!(results[0], MutOpResult::AddVertex(true));
        assert_eq!(results[2], MutOpResult::AddVertex(false));
        assert_eq!(results[3], MutOpResult::AddEdge(Ok(())));
        assert!(matches!(results[4], MutOpResult::AddEdge(Err(_))));
        assert_eq!(results[5], MutOpResult::AddUndirectedEdge(Ok(())));
        // There are two identical edges 1 -> 2, only one of them is removed.
        assert_eq!(results[6], MutOpResult::RemoveEdgeExact(true));
        assert_eq!(results[7], MutOpResult::RemoveEdge(true));
        assert_eq!(results[8], MutOpResult::RemoveVertex(false));

        assert_eq!(graph.edges(&1), vec![Edge::new(1, 2, 3.0)]);
        assert!(!graph.has_edge(&2, &1));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn arbitrary_sequence_keeps_consistency() {
        let data = (0..=255u8).cycle().take(1024).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);

        let ops = MutOpsSeq::<u8, u16>::arbitrary(&mut u).unwrap();
        let mut graph = Graph::new();

        for op in ops {
            op.apply(&mut graph);
            check_consistency(&graph).unwrap();
        }
    }
}
