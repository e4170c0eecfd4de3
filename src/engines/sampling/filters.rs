use crate::engines::centrality::{CentralityMetric, CentralitySet};
use crate::graph::NodeId;
use std::collections::HashSet;

/// Quantile-based significance filter over one centrality metric.
///
/// A candidate passes when its value under the metric is at least the
/// `quantile` point of the other pool nodes' values. This keeps nodes out of
/// a round's seed set when they only look important because the pool is
/// small: with the historical 1% default, a unique pool minimum fails while
/// nodes tied with the rest of the pool still pass.
#[derive(Debug, Clone)]
pub struct SignificanceFilter {
    pub metric: CentralityMetric,
    pub quantile: f64,
}

impl SignificanceFilter {
    pub fn new(metric: CentralityMetric, quantile: f64) -> Self {
        Self { metric, quantile }
    }

    /// The subset of `pool` passing this filter.
    ///
    /// A pool node missing from the metric's vector fails. If the metric was
    /// not computed at all the filter cannot discriminate and passes the
    /// whole pool.
    pub fn passing(&self, pool: &[NodeId], centralities: &CentralitySet) -> HashSet<NodeId> {
        let Some(vector) = centralities.vector(self.metric) else {
            log::warn!(
                "significance filter on {} skipped: metric not computed",
                self.metric
            );
            return pool.iter().cloned().collect();
        };

        if pool.len() <= 1 {
            return pool.iter().cloned().collect();
        }

        pool.iter()
            .filter(|node| {
                let Some(value) = vector.get(*node).copied() else {
                    return false;
                };
                let mut others: Vec<f64> = pool
                    .iter()
                    .filter(|other| *other != *node)
                    .map(|other| vector.get(other).copied().unwrap_or(0.0))
                    .collect();
                others.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

                let rank = (self.quantile * (others.len() - 1) as f64).floor() as usize;
                value >= others[rank.min(others.len() - 1)]
            })
            .cloned()
            .collect()
    }
}
