//! Default centrality provider: degree, closeness, and betweenness over the
//! unweighted graph, all by breadth-first search.
//!
//! Degree is `deg(v) / (n - 1)`. Closeness is `reachable / sum-of-distances`
//! per source, restricted to reachable pairs. Betweenness uses Brandes'
//! algorithm for unweighted graphs, normalized by `(n - 1)(n - 2)` so values
//! land in [0, 1] for undirected graphs.
//!
//! Closeness and betweenness cost O(V * E); both are skipped on graphs larger
//! than the configured cutoff, leaving the scorer to work from degree alone.

use super::{CentralityMetric, CentralityProvider, CentralitySet, CentralityVector};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use std::collections::VecDeque;

const DEFAULT_EXPENSIVE_METRIC_CUTOFF: usize = 500;

pub struct BfsCentralityProvider {
    /// Node count above which closeness and betweenness are not computed.
    expensive_metric_cutoff: usize,
}

impl Default for BfsCentralityProvider {
    fn default() -> Self {
        Self {
            expensive_metric_cutoff: DEFAULT_EXPENSIVE_METRIC_CUTOFF,
        }
    }
}

impl BfsCentralityProvider {
    pub fn new(expensive_metric_cutoff: usize) -> Self {
        Self {
            expensive_metric_cutoff,
        }
    }
}

impl CentralityProvider for BfsCentralityProvider {
    fn compute(&self, graph: &Graph) -> Result<CentralitySet> {
        let mut set = CentralitySet::new();
        set.insert(CentralityMetric::Degree, degree_centrality(graph));

        if graph.node_count() <= self.expensive_metric_cutoff {
            set.insert(CentralityMetric::Closeness, closeness_centrality(graph));
            set.insert(CentralityMetric::Betweenness, betweenness_centrality(graph));
        } else {
            log::info!(
                "graph has {} nodes (> cutoff {}), skipping closeness/betweenness",
                graph.node_count(),
                self.expensive_metric_cutoff
            );
        }

        Ok(set)
    }
}

pub fn degree_centrality(graph: &Graph) -> CentralityVector {
    let n = graph.node_count();
    graph
        .nodes()
        .map(|node| {
            let score = if n > 1 {
                graph.degree(node) as f64 / (n - 1) as f64
            } else {
                0.0
            };
            (node.clone(), score)
        })
        .collect()
}

pub fn closeness_centrality(graph: &Graph) -> CentralityVector {
    let index = NodeIndex::build(graph);

    index
        .ids
        .iter()
        .enumerate()
        .map(|(si, node)| {
            let dist = index.bfs_distances(si);
            let mut reachable = 0usize;
            let mut total = 0i64;
            for (ti, &d) in dist.iter().enumerate() {
                if ti != si && d >= 0 {
                    reachable += 1;
                    total += d;
                }
            }
            let score = if total > 0 {
                reachable as f64 / total as f64
            } else {
                0.0
            };
            (node.clone(), score)
        })
        .collect()
}

/// Brandes' betweenness for unweighted graphs.
///
/// One BFS per source computes shortest-path counts, then dependencies
/// accumulate in reverse discovery order. Since the graph is undirected,
/// every pair is visited from both endpoints, so the per-node sums are
/// normalized by `(n - 1)(n - 2)`.
pub fn betweenness_centrality(graph: &Graph) -> CentralityVector {
    let index = NodeIndex::build(graph);
    let n = index.ids.len();
    let mut cb = vec![0.0f64; n];

    for si in 0..n {
        // Discovery stack; farthest nodes are popped first.
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        // sigma[t]: number of shortest paths from the source to t.
        let mut sigma = vec![0.0f64; n];
        sigma[si] = 1.0;
        let mut dist = vec![-1i64; n];
        dist[si] = 0;

        let mut queue = VecDeque::new();
        queue.push_back(si);

        while let Some(vi) = queue.pop_front() {
            stack.push(vi);
            for &wi in &index.neighbors[vi] {
                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(wi);
                }
                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(vi);
                }
            }
        }

        let mut delta = vec![0.0f64; n];
        while let Some(wi) = stack.pop() {
            for &vi in &predecessors[wi] {
                if sigma[wi] > 0.0 {
                    delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                }
            }
            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    let scale = if n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        0.0
    };

    index
        .ids
        .iter()
        .enumerate()
        .map(|(i, node)| (node.clone(), cb[i] * scale))
        .collect()
}

/// Dense integer indexing of a graph's nodes for the BFS passes.
struct NodeIndex {
    ids: Vec<NodeId>,
    neighbors: Vec<Vec<usize>>,
}

impl NodeIndex {
    fn build(graph: &Graph) -> Self {
        let ids: Vec<NodeId> = graph.nodes().cloned().collect();
        let positions: std::collections::HashMap<&NodeId, usize> =
            ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
        let neighbors = ids
            .iter()
            .map(|id| {
                graph
                    .neighbors(id)
                    .iter()
                    .map(|neighbor| positions[neighbor])
                    .collect()
            })
            .collect();
        Self { ids, neighbors }
    }

    fn bfs_distances(&self, source: usize) -> Vec<i64> {
        let mut dist = vec![-1i64; self.ids.len()];
        dist[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(vi) = queue.pop_front() {
            for &wi in &self.neighbors[vi] {
                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(wi);
                }
            }
        }
        dist
    }
}
