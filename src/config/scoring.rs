use super::traits::ConfigSection;
use crate::engines::centrality::CentralityMetric;
use crate::error::{NetcascadeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-metric weights for the composite score.
///
/// Metrics the provider did not compute are simply absent from the weighted
/// mean; the remaining weights renormalize. Equal weights reproduce the
/// plain average.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub degree: f64,
    pub closeness: f64,
    pub betweenness: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            degree: 1.0,
            closeness: 1.0,
            betweenness: 1.0,
        }
    }
}

impl ScoringConfig {
    /// Weight map in the form the scorer consumes.
    pub fn weight_map(&self) -> BTreeMap<CentralityMetric, f64> {
        let mut weights = BTreeMap::new();
        weights.insert(CentralityMetric::Degree, self.degree);
        weights.insert(CentralityMetric::Closeness, self.closeness);
        weights.insert(CentralityMetric::Betweenness, self.betweenness);
        weights
    }
}

impl ConfigSection for ScoringConfig {
    fn section_name() -> &'static str {
        "scoring"
    }

    fn validate(&self) -> Result<()> {
        let weights = [self.degree, self.closeness, self.betweenness];
        if weights.iter().any(|&w| w < 0.0) {
            return Err(NetcascadeError::Configuration(
                "Scoring weights must not be negative".to_string(),
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(NetcascadeError::Configuration(
                "At least one scoring weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One competing strategy: a name plus the scoring weights it seeds with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySpec {
    pub name: String,
    #[serde(default)]
    pub scoring: ScoringConfig,
}
