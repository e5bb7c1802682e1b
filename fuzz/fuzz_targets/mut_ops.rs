#![no_main]

use libfuzzer_sys::fuzz_target;

use labelgraph::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<u8, f32>| {
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    let transposed = graph.transposed();
    check_consistency(&transposed)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
    assert_eq!(graph.edge_count(), transposed.edge_count());

    let connected = graph.is_connected();
    assert_eq!(connected, transposed.is_connected());

    if let Some(first) = graph.vertices().first() {
        if connected {
            assert_eq!(graph.walk(first).len(), graph.order());
        }

        for v in graph.vertices_iter() {
            if let Ok(path) = graph.shortest_path(first, v) {
                let mut at = first;
                for edge in &path {
                    assert_eq!(&edge.from, at);
                    at = &edge.to;
                }
            }
        }
    }

    let _ = graph.find_optimal_warehouse();
    let _ = graph.find_most_remote_clinic();
});
