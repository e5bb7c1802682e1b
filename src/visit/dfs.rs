use rustc_hash::FxHashSet;

use crate::{
    core::{Label, Weight},
    graph::Graph,
};

use super::{VisitSet, Visitor};

/// Depth-first traversal along outgoing edges.
///
/// A vertex is marked as visited when it is pushed to the stack and reported
/// when it is popped, so every vertex is reported at most once even if the
/// traversal is restarted from another root. Successors are pushed in
/// adjacency order, which means the last outgoing edge of a vertex is followed
/// first.
///
/// The visited set is pluggable. [`FxHashSet`] is used by default, a
/// [`BTreeSet`](std::collections::BTreeSet) gives deterministic memory layout
/// for labels that are expensive to hash.
#[derive(Debug, Clone)]
pub struct Dfs<V, S = FxHashSet<V>> {
    stack: Vec<V>,
    visited: S,
}

/// Traversal started from a root, see [`Dfs::start`].
pub struct DfsRooted<'a, V, S> {
    dfs: &'a mut Dfs<V, S>,
}

impl<V: Label> Dfs<V> {
    pub fn new() -> Self {
        Self::with_visit_set(FxHashSet::default())
    }
}

impl<V: Label> Default for Dfs<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> Dfs<V, S>
where
    V: Label,
    S: VisitSet<V>,
{
    pub fn with_visit_set(visited: S) -> Self {
        Self {
            stack: Vec::new(),
            visited,
        }
    }

    /// Starts (or continues) the traversal from `root`.
    ///
    /// The root is not checked for presence in the graph. An absent root is
    /// reported on its own, because it has no outgoing edges.
    pub fn start(&mut self, root: V) -> DfsRooted<'_, V, S> {
        if self.visited.visit(root.clone()) {
            self.stack.push(root);
        }

        DfsRooted { dfs: self }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset_visited();
    }

    pub fn visited(&self) -> &S {
        &self.visited
    }
}

impl<'a, V, W, S> Visitor<Graph<V, W>> for DfsRooted<'a, V, S>
where
    V: Label,
    W: Weight,
    S: VisitSet<V>,
{
    type Item = V;

    fn visit_next(&mut self, graph: &Graph<V, W>) -> Option<Self::Item> {
        let vertex = self.dfs.stack.pop()?;

        for edge in graph.outgoing(&vertex) {
            if self.dfs.visited.visit(edge.to.clone()) {
                self.dfs.stack.push(edge.to.clone());
            }
        }

        Some(vertex)
    }
}
