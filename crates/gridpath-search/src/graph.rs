//! Labelled weighted graphs and single-source Dijkstra distances.
//!
//! The grid search treats every step as cost 1. [`WeightedGraph`] covers the
//! general case: a small undirected graph stored as an adjacency matrix with
//! positive edge weights and a text label per vertex.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use log::debug;

/// An undirected graph with positive integer edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedGraph {
    size: usize,
    // Row-major `size × size`; `None` means no edge.
    weights: Vec<Option<u32>>,
    labels: Vec<String>,
}

impl WeightedGraph {
    /// A graph of `size` unlabelled vertices and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![None; size * size],
            labels: vec![String::new(); size],
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Connect `u` and `v` with weight `w`, replacing any earlier edge.
    ///
    /// Out-of-range vertices and zero weights are ignored; returns whether
    /// the edge was stored.
    pub fn add_edge(&mut self, u: usize, v: usize, w: u32) -> bool {
        if u >= self.size || v >= self.size || w == 0 {
            return false;
        }
        self.weights[u * self.size + v] = Some(w);
        self.weights[v * self.size + u] = Some(w);
        true
    }

    /// Weight of the edge between `u` and `v`, if any.
    pub fn weight(&self, u: usize, v: usize) -> Option<u32> {
        if u >= self.size || v >= self.size {
            return None;
        }
        self.weights[u * self.size + v]
    }

    /// Name vertex `v`. Out-of-range vertices are ignored.
    pub fn set_label(&mut self, v: usize, label: impl Into<String>) {
        if let Some(slot) = self.labels.get_mut(v) {
            *slot = label.into();
        }
    }

    pub fn label(&self, v: usize) -> Option<&str> {
        self.labels.get(v).map(String::as_str)
    }

    /// First vertex carrying `label`.
    pub fn vertex(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Shortest distance from the vertex labelled `source` to every vertex,
    /// indexed by vertex. Unreachable vertices are `None`.
    pub fn dijkstra(&self, source: &str) -> Result<Vec<Option<u32>>, GraphError> {
        let src = self.vertex(source).ok_or_else(|| GraphError::UnknownVertex {
            label: source.to_string(),
        })?;
        Ok(self.dijkstra_from(src))
    }

    /// Like [`dijkstra`](WeightedGraph::dijkstra) but from a vertex index.
    pub fn dijkstra_from(&self, src: usize) -> Vec<Option<u32>> {
        let mut dist: Vec<Option<u32>> = vec![None; self.size];
        let mut done = vec![false; self.size];
        if src >= self.size {
            return dist;
        }

        let mut open: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();
        dist[src] = Some(0);
        open.push(Reverse((0, src)));

        while let Some(Reverse((d, u))) = open.pop() {
            if done[u] {
                continue;
            }
            done[u] = true;

            for v in 0..self.size {
                let Some(w) = self.weights[u * self.size + v] else {
                    continue;
                };
                if done[v] {
                    continue;
                }
                let alt = d.saturating_add(w);
                if dist[v].is_none_or(|cur| alt < cur) {
                    dist[v] = Some(alt);
                    open.push(Reverse((alt, v)));
                }
            }
        }

        debug!(
            "dijkstra: {} of {} vertices reached from {}",
            dist.iter().filter(|d| d.is_some()).count(),
            self.size,
            src
        );
        dist
    }
}

/// Errors from [`WeightedGraph`] queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No vertex carries the requested label.
    UnknownVertex { label: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex { label } => {
                write!(f, "graph: no vertex labelled \u{201c}{label}\u{201d}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
