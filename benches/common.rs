#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generates pairs `(v, w)` with `w < v` such that every pair is present with
/// probability `p`, without testing every pair separately.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Random edges with random orientation, or in both directions if
/// `undirected` is set.
fn random_edges(
    vertex_count: usize,
    density: f32,
    undirected: bool,
    rng: &mut Rng,
) -> Vec<(u32, u32, f32)> {
    let mut generator = RandomEdges::new(vertex_count, density);
    let mut edges = Vec::new();

    while let Some((u, v)) = generator.next_edge(rng) {
        let (u, v) = (u as u32, v as u32);
        let distance = rng.f32();

        if undirected {
            edges.push((u, v, distance));
            edges.push((v, u, distance));
        } else if rng.bool() {
            edges.push((u, v, distance));
        } else {
            edges.push((v, u, distance));
        }
    }

    edges
}

pub fn labelgraph_random(
    vertex_count: usize,
    density: f32,
    undirected: bool,
    rng: &mut Rng,
) -> labelgraph::Graph<u32, f32> {
    let mut graph = labelgraph::Graph::new();

    for v in 0..vertex_count as u32 {
        graph.add_vertex(v);
    }

    for (u, v, distance) in random_edges(vertex_count, density, undirected, rng) {
        graph.add_edge(u, v, distance);
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    undirected: bool,
    rng: &mut Rng,
) -> petgraph::Graph<u32, f32> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count as u32 {
        graph.add_node(v);
    }

    for (u, v, distance) in random_edges(vertex_count, density, undirected, rng) {
        graph.add_edge(NodeIndex::new(u as usize), NodeIndex::new(v as usize), distance);
    }

    graph
}
