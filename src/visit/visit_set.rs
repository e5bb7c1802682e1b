use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// Set of vertices already discovered by a traversal.
pub trait VisitSet<V> {
    /// Marks the vertex as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, vertex: V) -> bool;
    fn is_visited(&self, vertex: &V) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<V: Ord> VisitSet<V> for BTreeSet<V> {
    fn visit(&mut self, vertex: V) -> bool {
        self.insert(vertex)
    }

    fn is_visited(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<V: Hash + Eq, S: BuildHasher> VisitSet<V> for HashSet<V, S> {
    fn visit(&mut self, vertex: V) -> bool {
        self.insert(vertex)
    }

    fn is_visited(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
