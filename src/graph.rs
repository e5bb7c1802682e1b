//! Directed graph keyed by vertex labels.

use std::collections::BTreeMap;

use crate::{
    algo::{connected, placement, shortest_paths, ShortestPaths},
    core::{AddEdgeError, AddEdgeErrorKind, Edge, Label, Weight},
    visit::{Dfs, Visitor},
};

/// Directed graph with vertices identified by labels of type `V` and edges
/// weighted by distances of type `W`.
///
/// Vertices are kept in insertion order. Outgoing edges of every vertex are
/// kept in insertion order as well. Parallel edges are allowed and tracked
/// independently.
///
/// # Examples
///
/// ```
/// use labelgraph::Graph;
///
/// let mut graph = Graph::new();
///
/// graph.add_vertex("Samara");
/// graph.add_vertex("Tolyatti");
/// graph.add_vertex("Syzran");
///
/// graph.add_undirected_edge("Samara", "Tolyatti", 95.0);
/// graph.add_undirected_edge("Samara", "Syzran", 140.0);
///
/// assert!(graph.is_connected());
///
/// let path = graph.shortest_path(&"Tolyatti", &"Syzran").unwrap();
/// let total: f64 = path.iter().map(|edge| edge.distance).sum();
/// assert_eq!(total, 235.0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    vertices: Vec<V>,
    // Empty lists are never stored, a vertex without outgoing edges has no
    // entry.
    adjacency: BTreeMap<V, Vec<Edge<V, W>>>,
}

impl<V, W> Graph<V, W> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: BTreeMap::new(),
        }
    }
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W>
where
    V: Label,
    W: Weight,
{
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Adds the vertex if it is not present yet. Returns `false` if it was.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.has_vertex(&vertex) {
            return false;
        }

        self.vertices.push(vertex);
        true
    }

    /// Removes the vertex together with all its outgoing and incoming edges.
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.vertices.iter().position(|v| v == vertex) else {
            return false;
        };

        self.vertices.remove(index);
        self.adjacency.remove(vertex);

        self.adjacency.retain(|_, edges| {
            edges.retain(|edge| &edge.to != vertex);
            !edges.is_empty()
        });

        true
    }

    pub fn try_add_edge(&mut self, from: V, to: V, distance: W) -> Result<(), AddEdgeError<V, W>> {
        let edge = Edge::new(from, to, distance);
        self.check_endpoints(edge)
            .map(|edge| self.insert_edge(edge))
    }

    /// Adds a directed edge.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not in the graph. See
    /// [`try_add_edge`](Self::try_add_edge) for a fallible version.
    pub fn add_edge(&mut self, from: V, to: V, distance: W) {
        if let Err(error) = self.try_add_edge(from, to, distance) {
            panic!("{error}");
        }
    }

    /// Adds a pair of directed edges `v1 → v2` and `v2 → v1` with the same
    /// distance. The two edges are independent afterwards.
    ///
    /// Nothing is added if any of the endpoints is missing. The error then
    /// carries the `v1 → v2` edge.
    pub fn try_add_undirected_edge(
        &mut self,
        v1: V,
        v2: V,
        distance: W,
    ) -> Result<(), AddEdgeError<V, W>> {
        let edge = self.check_endpoints(Edge::new(v1, v2, distance))?;

        self.insert_edge(edge.clone().reversed());
        self.insert_edge(edge);
        Ok(())
    }

    /// Adds a pair of directed edges `v1 → v2` and `v2 → v1`.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not in the graph. See
    /// [`try_add_undirected_edge`](Self::try_add_undirected_edge) for a
    /// fallible version.
    pub fn add_undirected_edge(&mut self, v1: V, v2: V, distance: W) {
        if let Err(error) = self.try_add_undirected_edge(v1, v2, distance) {
            panic!("{error}");
        }
    }

    /// Removes all edges going from `from` to `to`. Returns whether at least
    /// one edge was removed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };

        let before = edges.len();
        edges.retain(|edge| &edge.to != to);
        let removed = edges.len() != before;

        if edges.is_empty() {
            self.adjacency.remove(from);
        }

        removed
    }

    /// Removes the first stored edge equal to `edge`, keeping its possible
    /// duplicates. Returns whether such edge was found.
    pub fn remove_edge_exact(&mut self, edge: &Edge<V, W>) -> bool {
        let Some(edges) = self.adjacency.get_mut(&edge.from) else {
            return false;
        };

        let Some(index) = edges.iter().position(|e| e == edge) else {
            return false;
        };

        edges.remove(index);

        if edges.is_empty() {
            self.adjacency.remove(&edge.from);
        }

        true
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing(from).iter().any(|edge| &edge.to == to)
    }

    pub fn has_edge_exact(&self, edge: &Edge<V, W>) -> bool {
        self.outgoing(&edge.from).iter().any(|e| e == edge)
    }

    /// Returns copies of the outgoing edges of the vertex, in insertion order.
    pub fn edges(&self, vertex: &V) -> Vec<Edge<V, W>> {
        self.outgoing(vertex).to_vec()
    }

    /// Returns the outgoing edges of the vertex, in insertion order. Empty for
    /// a vertex that is not in the graph.
    pub fn outgoing(&self, vertex: &V) -> &[Edge<V, W>] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over all edges, grouped by source vertex in label order.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<V, W>> + '_ {
        self.adjacency.values().flatten()
    }

    /// Returns a copy of the vertices in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    pub fn vertices_iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of outgoing edges of the vertex, zero if it is not in the graph.
    pub fn degree(&self, vertex: &V) -> usize {
        self.outgoing(vertex).len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns a graph with the same vertices and every edge reversed.
    pub fn transposed(&self) -> Self {
        let mut transposed = Graph {
            vertices: self.vertices.clone(),
            adjacency: BTreeMap::new(),
        };

        for edge in self.all_edges() {
            transposed.insert_edge(edge.clone().reversed());
        }

        transposed
    }

    /// Tests whether every vertex is reachable from every other vertex.
    ///
    /// An empty graph is connected.
    pub fn is_connected(&self) -> bool {
        connected::is_connected(self)
    }

    /// Returns the edges of a shortest path from `from` to `to`, or an empty
    /// vector if `to` is not reachable.
    ///
    /// Fails if the graph contains an edge with negative distance, no matter
    /// whether it lies on the path.
    ///
    /// # Panics
    ///
    /// Path lengths are computed in `W`. With an integer type, a path whose
    /// length exceeds `W::MAX` overflows, which panics in debug builds. Pick
    /// an integer type wide enough for the longest path (`u64` is a safe
    /// choice for most inputs) or a float type, which saturates to infinity
    /// instead.
    pub fn shortest_path(
        &self,
        from: &V,
        to: &V,
    ) -> Result<Vec<Edge<V, W>>, shortest_paths::Error> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            shortest_paths::check_nonnegative(self)?;
            return Ok(Vec::new());
        }

        let paths = ShortestPaths::on(self).goal(to.clone()).run(from.clone())?;
        Ok(paths.path_to(to))
    }

    /// Returns the vertices reachable from `start` in depth-first order,
    /// starting with `start` itself. Empty if `start` is not in the graph.
    pub fn walk(&self, start: &V) -> Vec<V> {
        if !self.has_vertex(start) {
            return Vec::new();
        }

        Dfs::new().start(start.clone()).into_iter(self).collect()
    }

    /// See [`placement::average_distance`].
    pub fn average_distance(&self, from: &V) -> Result<W, placement::Error> {
        placement::average_distance(self, from)
    }

    /// See [`placement::find_optimal_warehouse`].
    pub fn find_optimal_warehouse(&self) -> Result<V, placement::Error> {
        placement::find_optimal_warehouse(self)
    }

    /// See [`placement::average_edge_length`].
    pub fn average_edge_length(&self, vertex: &V) -> f64 {
        placement::average_edge_length(self, vertex)
    }

    /// See [`placement::find_most_remote_clinic`].
    pub fn find_most_remote_clinic(&self) -> Result<V, placement::Error> {
        placement::find_most_remote_clinic(self)
    }

    pub(crate) fn adjacency(&self) -> &BTreeMap<V, Vec<Edge<V, W>>> {
        &self.adjacency
    }

    fn check_endpoints(&self, edge: Edge<V, W>) -> Result<Edge<V, W>, AddEdgeError<V, W>> {
        if !self.has_vertex(&edge.from) {
            Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent))
        } else if !self.has_vertex(&edge.to) {
            Err(AddEdgeError::new(edge, AddEdgeErrorKind::DestinationAbsent))
        } else {
            Ok(edge)
        }
    }

    fn insert_edge(&mut self, edge: Edge<V, W>) {
        self.adjacency
            .entry(edge.from.clone())
            .or_default()
            .push(edge);
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::check_consistency;

    use super::*;

    fn create_triangle() -> Graph<&'static str, u32> {
        let mut graph = Graph::new();

        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_vertex("c");

        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 2);
        graph.add_edge("c", "a", 3);

        graph
    }

    #[test]
    fn add_vertex_idempotent() {
        let mut graph = Graph::<_, u32>::new();

        assert!(graph.add_vertex("a"));
        assert_eq!(graph.order(), 1);

        assert!(!graph.add_vertex("a"));
        assert_eq!(graph.order(), 1);
        assert_eq!(graph.vertices(), vec!["a"]);
    }

    #[test]
    fn vertices_keep_insertion_order() {
        let mut graph = Graph::<_, u32>::new();

        for v in ["z", "b", "x", "a"] {
            graph.add_vertex(v);
        }

        assert_eq!(graph.vertices(), vec!["z", "b", "x", "a"]);

        graph.remove_vertex(&"b");
        assert_eq!(graph.vertices(), vec!["z", "x", "a"]);
    }

    #[test]
    fn add_edge_absent_endpoint() {
        let mut graph = Graph::new();
        graph.add_vertex("a");

        assert_matches!(
            graph.try_add_edge("a", "b", 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent,
                ..
            })
        );
        assert_matches!(
            graph.try_add_edge("b", "a", 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent,
                ..
            })
        );

        assert!(!graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"b", &"a"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edge_error_returns_edge() {
        let mut graph = Graph::new();
        graph.add_vertex("a");

        let error = graph.try_add_edge("x", "a", 7).unwrap_err();
        assert_eq!(error.edge, Edge::new("x", "a", 7));
    }

    #[test]
    #[should_panic(expected = "adding edge failed: source does not exist")]
    fn add_edge_panics_on_absent_endpoint() {
        let mut graph = Graph::new();
        graph.add_vertex("b");
        graph.add_edge("a", "b", 1.0);
    }

    #[test]
    fn add_undirected_edge_is_atomic() {
        let mut graph = Graph::new();
        graph.add_vertex("a");

        assert_matches!(
            graph.try_add_undirected_edge("a", "b", 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent,
                ..
            })
        );
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(&"a"), 0);
    }

    #[test]
    fn undirected_edge_halves_are_independent() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");

        graph.add_undirected_edge("a", "b", 4);
        assert!(graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge(&"b", &"a"));

        assert!(graph.remove_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge_exact(&Edge::new("b", "a", 4)));
    }

    #[test]
    fn remove_edge_removes_all_parallel() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");

        graph.add_edge("a", "b", 1);
        graph.add_edge("a", "b", 2);
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "a", 1);

        assert_eq!(graph.degree(&"a"), 3);
        assert!(graph.remove_edge(&"a", &"b"));
        assert_eq!(graph.degree(&"a"), 0);
        assert_eq!(graph.degree(&"b"), 1);

        assert!(!graph.remove_edge(&"a", &"b"));
        assert!(!graph.remove_edge(&"x", &"b"));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_edge_exact_removes_first_match() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");

        graph.add_edge("a", "b", 1);
        graph.add_edge("a", "b", 2);
        graph.add_edge("a", "b", 1);

        assert!(graph.remove_edge_exact(&Edge::new("a", "b", 1)));
        assert_eq!(
            graph.edges(&"a"),
            vec![Edge::new("a", "b", 2), Edge::new("a", "b", 1)]
        );

        assert!(!graph.remove_edge_exact(&Edge::new("a", "b", 3)));
        assert!(!graph.remove_edge_exact(&Edge::new("b", "a", 1)));

        assert!(graph.remove_edge_exact(&Edge::new("a", "b", 1)));
        assert!(graph.remove_edge_exact(&Edge::new("a", "b", 2)));
        assert!(!graph.has_edge(&"a", &"b"));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn has_edge_exact_considers_distance() {
        let graph = create_triangle();

        assert!(graph.has_edge_exact(&Edge::new("a", "b", 1)));
        assert!(!graph.has_edge_exact(&Edge::new("a", "b", 2)));
        assert!(!graph.has_edge_exact(&Edge::new("b", "a", 1)));
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut graph = create_triangle();
        graph.add_vertex("d");
        graph.add_edge("d", "b", 1);
        graph.add_edge("b", "d", 1);
        graph.add_edge("b", "b", 1);

        assert!(graph.remove_vertex(&"b"));
        assert!(!graph.has_vertex(&"b"));

        for x in graph.vertices() {
            assert!(!graph.has_edge(&"b", &x));
            assert!(!graph.has_edge(&x, &"b"));
        }

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&"c", &"a"));
        assert!(!graph.remove_vertex(&"b"));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn edges_in_insertion_order() {
        let mut graph = Graph::new();

        for v in [3, 1, 2] {
            graph.add_vertex(v);
        }

        graph.add_edge(1, 3, 0.5);
        graph.add_edge(1, 2, 0.25);
        graph.add_edge(1, 1, 1.0);

        assert_eq!(
            graph.edges(&1),
            vec![
                Edge::new(1, 3, 0.5),
                Edge::new(1, 2, 0.25),
                Edge::new(1, 1, 1.0)
            ]
        );
        assert!(graph.edges(&2).is_empty());
        assert!(graph.edges(&42).is_empty());
    }

    #[test]
    fn degree_counts_outgoing() {
        let mut graph = create_triangle();
        graph.add_edge("a", "c", 5);

        assert_eq!(graph.degree(&"a"), 2);
        assert_eq!(graph.degree(&"b"), 1);
        assert_eq!(graph.degree(&"missing"), 0);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn transposed_reverses_edges() {
        let graph = create_triangle();
        let transposed = graph.transposed();

        assert_eq!(transposed.vertices(), graph.vertices());
        assert!(transposed.has_edge_exact(&Edge::new("b", "a", 1)));
        assert!(transposed.has_edge_exact(&Edge::new("c", "b", 2)));
        assert!(transposed.has_edge_exact(&Edge::new("a", "c", 3)));
        assert!(!transposed.has_edge(&"a", &"b"));
        check_consistency(&transposed).unwrap();
    }

    #[test]
    fn walk_basic() {
        let mut graph = Graph::new();

        for v in ["a", "b", "c", "d"] {
            graph.add_vertex(v);
        }

        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 1);
        graph.add_edge("c", "a", 1);

        assert_eq!(graph.walk(&"a"), vec!["a", "b", "c"]);
        assert_eq!(graph.walk(&"d"), vec!["d"]);
        assert!(graph.walk(&"e").is_empty());
    }

    #[test]
    fn walk_visits_each_vertex_once() {
        let mut graph = Graph::new();

        for v in 0..4 {
            graph.add_vertex(v);
        }

        graph.add_undirected_edge(0, 1, 1);
        graph.add_undirected_edge(0, 2, 1);
        graph.add_undirected_edge(1, 2, 1);
        graph.add_undirected_edge(2, 3, 1);
        graph.add_edge(0, 1, 1);

        let walk = graph.walk(&0);
        assert_eq!(walk[0], 0);
        assert_eq!(walk.len(), 4);

        let mut sorted = walk.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn directed_chain_scenario() {
        let mut graph = Graph::new();

        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_vertex("C");

        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 1);

        assert!(!graph.is_connected());

        let path = graph.shortest_path(&"A", &"C").unwrap();
        assert_eq!(path, vec![Edge::new("A", "B", 1), Edge::new("B", "C", 1)]);
        assert_eq!(path.iter().map(|edge| edge.distance).sum::<u32>(), 2);

        assert!(graph.shortest_path(&"C", &"A").unwrap().is_empty());
    }

    #[test]
    fn shortest_path_absent_vertices() {
        let graph = create_triangle();

        assert!(graph.shortest_path(&"a", &"x").unwrap().is_empty());
        assert!(graph.shortest_path(&"x", &"a").unwrap().is_empty());
        assert!(graph.shortest_path(&"a", &"a").unwrap().is_empty());
    }

    #[test]
    fn shortest_path_absent_vertices_still_checks_weights() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge("a", "b", -1);

        assert_matches!(
            graph.shortest_path(&"a", &"x"),
            Err(shortest_paths::Error::NegativeWeight)
        );
    }

    #[test]
    fn clone_is_independent() {
        let graph = create_triangle();
        let mut copy = graph.clone();

        copy.remove_vertex(&"a");
        assert_eq!(graph.order(), 3);
        assert_eq!(copy.order(), 2);
        assert!(graph.has_edge(&"c", &"a"));
    }
}
