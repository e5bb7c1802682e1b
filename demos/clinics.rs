//! Finds the clinic farthest from its neighbours in a small road network.
//!
//! Run with `RUST_LOG=labelgraph=debug` to see the selection logs.

use labelgraph::Graph;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let clinics = [
        "Clinic 1", "Clinic 2", "Clinic 3", "Clinic 4", "Clinic 5", "Clinic 6", "Clinic 7",
    ];

    let mut graph = Graph::<String, f64>::new();

    for clinic in clinics {
        graph.add_vertex(clinic.to_string());
    }

    // Road distances in kilometers.
    let roads = [
        (0, 6, 1.5),
        (1, 3, 3.2),
        (2, 5, 4.1),
        (3, 4, 2.8),
        (4, 6, 2.3),
        (5, 1, 5.0),
        (0, 3, 3.5),
    ];

    for (a, b, distance) in roads {
        graph.add_undirected_edge(clinics[a].to_string(), clinics[b].to_string(), distance);
    }

    if !graph.is_connected() {
        eprintln!("error: the clinic network is not connected");
        return;
    }

    let remote = match graph.find_most_remote_clinic() {
        Ok(remote) => remote,
        Err(error) => {
            eprintln!("error: {error}");
            return;
        }
    };

    println!("Most remote clinic: {remote}");
    println!(
        "Average distance to neighbours: {:.2} km",
        graph.average_edge_length(&remote)
    );
    println!();

    println!("Average distance for every clinic:");
    for clinic in graph.vertices_iter() {
        println!("{clinic}: {:.2} km", graph.average_edge_length(clinic));
    }

    if let Ok(hub) = graph.find_optimal_warehouse() {
        println!();
        println!("Best place for a shared warehouse: {hub}");
    }
}
