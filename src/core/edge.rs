/// Directed edge `from → to` with a distance.
///
/// Two edges are equal if all three fields are equal. A graph may store
/// multiple equal edges; each of them is tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edge<V, W> {
    pub from: V,
    pub to: V,
    pub distance: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(from: V, to: V, distance: W) -> Self {
        Self { from, to, distance }
    }

    /// Returns the same edge pointing in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            distance: self.distance,
        }
    }

    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((from, to, distance): (V, V, W)) -> Self {
        Self::new(from, to, distance)
    }
}
