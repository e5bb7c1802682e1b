pub mod connected;
pub mod placement;
pub mod shortest_paths;

pub use connected::is_connected;
pub use placement::{
    average_distance, average_edge_length, find_most_remote_clinic, find_optimal_warehouse,
};
pub use shortest_paths::ShortestPaths;
