use crate::engines::centrality::{CentralityMetric, CentralitySet};
use crate::error::NetcascadeError;
use crate::graph::Graph;
use crate::types::CompositeScore;
use std::collections::BTreeMap;

/// Combines per-metric centrality vectors into one composite importance
/// score per node.
///
/// The composite is a weighted arithmetic mean over the metrics present in
/// the [`CentralitySet`]; weights are renormalized over the metrics actually
/// available for each node, so a node missing from one metric's vector skips
/// that metric only. Scoring is pure: no randomness, no mutation.
pub struct SeedScorer {
    weights: BTreeMap<CentralityMetric, f64>,
}

impl Default for SeedScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedScorer {
    /// Equal weighting across whatever metrics the provider produced.
    pub fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    pub fn with_weights(weights: BTreeMap<CentralityMetric, f64>) -> Self {
        Self { weights }
    }

    /// Score every node in the graph. Total over the node set: nodes with no
    /// incident edges (or no usable metric values) score 0 rather than being
    /// excluded.
    pub fn score(&self, graph: &Graph, centralities: &CentralitySet) -> CompositeScore {
        let metrics = centralities.metrics();

        graph
            .nodes()
            .map(|node| {
                if graph.degree(node) == 0 {
                    return (node.clone(), 0.0);
                }

                let mut weight_sum = 0.0;
                let mut total = 0.0;
                for &metric in &metrics {
                    let weight = self.metric_weight(metric);
                    if weight <= 0.0 {
                        continue;
                    }
                    match centralities.value(metric, node) {
                        Some(value) => {
                            weight_sum += weight;
                            total += weight * value.clamp(0.0, 1.0);
                        }
                        None => {
                            log::warn!(
                                "{}",
                                NetcascadeError::MissingCentrality {
                                    metric: metric.to_string(),
                                    node: node.clone(),
                                }
                            );
                        }
                    }
                }

                let score = if weight_sum > 0.0 {
                    total / weight_sum
                } else {
                    0.0
                };
                (node.clone(), score)
            })
            .collect()
    }

    fn metric_weight(&self, metric: CentralityMetric) -> f64 {
        if self.weights.is_empty() {
            1.0
        } else {
            self.weights.get(&metric).copied().unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::centrality::CentralityVector;

    fn two_node_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("a".to_string(), "b".to_string());
        graph
    }

    fn vector(pairs: &[(&str, f64)]) -> CentralityVector {
        pairs
            .iter()
            .map(|(node, value)| (node.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_equal_weighting_averages_metrics() {
        let graph = two_node_graph();
        let mut centralities = CentralitySet::new();
        centralities.insert(CentralityMetric::Degree, vector(&[("a", 0.8), ("b", 0.2)]));
        centralities.insert(
            CentralityMetric::Closeness,
            vector(&[("a", 0.4), ("b", 0.6)]),
        );

        let scores = SeedScorer::new().score(&graph, &centralities);
        assert!((scores["a"] - 0.6).abs() < 1e-10);
        assert!((scores["b"] - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_missing_node_skips_that_metric_only() {
        let graph = two_node_graph();
        let mut centralities = CentralitySet::new();
        centralities.insert(CentralityMetric::Degree, vector(&[("a", 0.8), ("b", 0.2)]));
        // "b" absent from closeness: its score falls back to degree alone.
        centralities.insert(CentralityMetric::Closeness, vector(&[("a", 0.4)]));

        let scores = SeedScorer::new().score(&graph, &centralities);
        assert!((scores["a"] - 0.6).abs() < 1e-10);
        assert!((scores["b"] - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_custom_weights_renormalize() {
        let graph = two_node_graph();
        let mut centralities = CentralitySet::new();
        centralities.insert(CentralityMetric::Degree, vector(&[("a", 1.0), ("b", 0.0)]));
        centralities.insert(
            CentralityMetric::Closeness,
            vector(&[("a", 0.0), ("b", 1.0)]),
        );

        let mut weights = BTreeMap::new();
        weights.insert(CentralityMetric::Degree, 3.0);
        weights.insert(CentralityMetric::Closeness, 1.0);

        let scores = SeedScorer::with_weights(weights).score(&graph, &centralities);
        assert!((scores["a"] - 0.75).abs() < 1e-10);
        assert!((scores["b"] - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_isolated_node_scores_zero() {
        let mut graph = two_node_graph();
        graph.add_node("c".to_string());
        let mut centralities = CentralitySet::new();
        centralities.insert(
            CentralityMetric::Degree,
            vector(&[("a", 0.5), ("b", 0.5), ("c", 0.9)]),
        );

        let scores = SeedScorer::new().score(&graph, &centralities);
        assert_eq!(scores["c"], 0.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let graph = two_node_graph();
        let mut centralities = CentralitySet::new();
        centralities.insert(CentralityMetric::Degree, vector(&[("a", 0.7), ("b", 0.3)]));

        let scorer = SeedScorer::new();
        assert_eq!(
            scorer.score(&graph, &centralities),
            scorer.score(&graph, &centralities)
        );
    }
}
