use super::traits::ConfigSection;
use crate::error::{NetcascadeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    /// Independent trials per batch; trial `i` uses round `i` of each
    /// strategy's schedule.
    pub num_trials: usize,
    /// Base RNG seed for reproducible batches; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            num_trials: 50,
            seed: None,
        }
    }
}

impl ConfigSection for TrialConfig {
    fn section_name() -> &'static str {
        "trials"
    }

    fn validate(&self) -> Result<()> {
        if self.num_trials == 0 {
            return Err(NetcascadeError::Configuration(
                "Number of trials must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
