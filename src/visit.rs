//! Graph traversal.
//!
//! Traversals are **iterative**: they keep their own stack instead of
//! recursing, so they are not limited by the size of the program stack and can
//! be advanced one step at a time through the [`Visitor`] trait.

pub mod dfs;

mod visit_set;

#[doc(inline)]
pub use self::{dfs::Dfs, visit_set::VisitSet};

/// Trait for a specific graph traversal approach.
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The visitor doesn't hold a reference to the graph, so it can be passed
    /// around without lifetime problems.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Iterator over elements visited by a borrowed [`Visitor`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Iterator over elements visited by an owned [`Visitor`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
