pub mod edge;
pub mod error;
pub mod label;
pub mod weight;

pub use edge::Edge;
pub use error::{AddEdgeError, AddEdgeErrorKind};
pub use label::Label;
pub use weight::Weight;
