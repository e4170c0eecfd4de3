use crate::types::{StrategyName, TrialFailure, TrialResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Mean node count for one strategy across all succeeded trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyAverage {
    pub strategy: StrategyName,
    pub mean_nodes: f64,
}

/// Aggregated outcome of a trial batch.
///
/// `averages` is ranked descending by mean node count; ties keep the original
/// strategy ordering. `trials` is sorted by trial index regardless of the
/// order trials finished in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialReport {
    pub timestamp: String,
    pub trials: Vec<TrialResult>,
    pub failures: Vec<TrialFailure>,
    pub averages: Vec<StrategyAverage>,
}

impl TrialReport {
    /// Ranked plain-text rendering, one block per trial plus the averages.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for trial in &self.trials {
            let _ = writeln!(out, "Trial {}", trial.trial);
            let mut ranked: Vec<(&StrategyName, usize)> = self
                .averages
                .iter()
                .filter_map(|avg| {
                    trial
                        .counts
                        .get(&avg.strategy)
                        .map(|&count| (&avg.strategy, count))
                })
                .collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            for (strategy, count) in ranked {
                let seeds = trial
                    .seeds
                    .get(strategy)
                    .map(|s| s.join(", "))
                    .unwrap_or_default();
                let _ = writeln!(out, "  {strategy} won {count} nodes with seeds: [{seeds}]");
            }
        }

        for failure in &self.failures {
            let _ = writeln!(out, "Trial {} failed: {}", failure.trial, failure.message);
        }

        let _ = writeln!(out, "Averages over {} trials:", self.trials.len());
        for average in &self.averages {
            let _ = writeln!(
                out,
                "  {} averaged {:.2} nodes",
                average.strategy, average.mean_nodes
            );
        }

        out
    }
}
