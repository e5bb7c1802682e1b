use std::{cmp::Reverse, collections::BinaryHeap};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{
    core::{Label, Weight},
    graph::Graph,
};

use super::{check_nonnegative, Error, ShortestPaths};

pub fn dijkstra<V, W>(
    graph: &Graph<V, W>,
    source: V,
    goal: Option<V>,
) -> Result<ShortestPaths<V, W>, Error>
where
    V: Label,
    W: Weight,
{
    check_nonnegative(graph)?;

    let mut dist: FxHashMap<V, W> = graph
        .vertices_iter()
        .map(|vertex| (vertex.clone(), W::inf()))
        .collect();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    dist.insert(source.clone(), W::zero());
    queue.push(Reverse((W::Ord::from(W::zero()), source.clone())));

    let mut relaxed = 0usize;

    while let Some(Reverse((vertex_dist, vertex))) = queue.pop() {
        let vertex_dist: W = vertex_dist.into();

        // The queue is not updated on relaxation, so it can contain stale
        // entries for vertices that were reached by a shorter path since.
        if matches!(dist.get(&vertex), Some(best) if vertex_dist > *best) {
            continue;
        }

        if goal.as_ref() == Some(&vertex) {
            break;
        }

        for edge in graph.outgoing(&vertex) {
            let next_dist = vertex_dist.clone() + edge.distance.clone();
            let curr_dist = dist.entry(edge.to.clone()).or_insert_with(W::inf);

            if next_dist < *curr_dist {
                *curr_dist = next_dist.clone();
                pred.insert(edge.to.clone(), edge.clone());
                queue.push(Reverse((next_dist.into(), edge.to.clone())));
                relaxed += 1;
            }
        }
    }

    trace!(?source, ?goal, relaxed, "dijkstra finished");

    Ok(ShortestPaths { source, dist, pred })
}
