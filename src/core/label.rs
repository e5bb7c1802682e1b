use std::{fmt::Debug, hash::Hash};

/// Bound for vertex labels.
///
/// A label is the identity of a vertex: two vertices are the same vertex if
/// and only if their labels compare equal. Labels are cloned into the graph and
/// into the scratch state of algorithms, so cheap clones (integers, `&str`,
/// `Rc<str>`) are preferable for large graphs.
///
/// `Debug` is required so that labels can be reported in log events, in
/// consistency check errors and in the `Debug` output of the graph and of
/// algorithm results. All standard library types usable as labels implement
/// it, custom types can derive it.
pub trait Label: Clone + Ord + Hash + Debug {}

impl<T> Label for T where T: Clone + Ord + Hash + Debug {}
