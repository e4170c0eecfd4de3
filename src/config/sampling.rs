use super::traits::ConfigSection;
use crate::engines::centrality::CentralityMetric;
use crate::error::{NetcascadeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Seeds chosen per round.
    pub seed_budget: usize,
    /// Rounds in a schedule; one seed set per trial.
    pub rounds: usize,
    /// Top fraction of nodes (by composite score) forming the candidate pool.
    pub pool_fraction: f64,
    /// Fraction of other pool nodes a candidate must rank above, per filter
    /// metric. The historical default of 1% is kept as a plain config value.
    pub significance_quantile: f64,
    /// Metrics the significance filter is applied to.
    pub filter_metrics: Vec<CentralityMetric>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed_budget: 5,
            rounds: 50,
            pool_fraction: 0.10,
            significance_quantile: 0.01,
            filter_metrics: vec![CentralityMetric::Degree, CentralityMetric::Closeness],
        }
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<()> {
        if self.seed_budget == 0 {
            return Err(NetcascadeError::Configuration(
                "Seed budget must be at least 1".to_string(),
            ));
        }
        if self.rounds == 0 {
            return Err(NetcascadeError::Configuration(
                "Rounds must be at least 1".to_string(),
            ));
        }
        if self.pool_fraction <= 0.0 || self.pool_fraction > 1.0 {
            return Err(NetcascadeError::Configuration(
                "Pool fraction must be in (0, 1]".to_string(),
            ));
        }
        if self.significance_quantile < 0.0 || self.significance_quantile > 1.0 {
            return Err(NetcascadeError::Configuration(
                "Significance quantile must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
