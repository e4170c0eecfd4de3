pub mod bfs;

pub use bfs::BfsCentralityProvider;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-node values for one centrality metric.
pub type CentralityVector = HashMap<NodeId, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralityMetric {
    Degree,
    Closeness,
    Betweenness,
}

impl CentralityMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            CentralityMetric::Degree => "degree",
            CentralityMetric::Closeness => "closeness",
            CentralityMetric::Betweenness => "betweenness",
        }
    }
}

impl std::fmt::Display for CentralityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The centrality vectors computed for one graph, keyed by metric.
#[derive(Debug, Clone, Default)]
pub struct CentralitySet {
    vectors: HashMap<CentralityMetric, CentralityVector>,
}

impl CentralitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: CentralityMetric, vector: CentralityVector) {
        self.vectors.insert(metric, vector);
    }

    pub fn vector(&self, metric: CentralityMetric) -> Option<&CentralityVector> {
        self.vectors.get(&metric)
    }

    pub fn value(&self, metric: CentralityMetric, node: &str) -> Option<f64> {
        self.vectors.get(&metric).and_then(|v| v.get(node)).copied()
    }

    /// Metrics present, in a stable order.
    pub fn metrics(&self) -> Vec<CentralityMetric> {
        let mut metrics: Vec<_> = self.vectors.keys().copied().collect();
        metrics.sort();
        metrics
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Source of per-node importance metrics for a fixed graph.
///
/// Implementations must be deterministic for a fixed graph and return values
/// normalized into [0, 1]; isolated nodes may be given 0 or omitted.
pub trait CentralityProvider {
    fn compute(&self, graph: &Graph) -> Result<CentralitySet>;
}
