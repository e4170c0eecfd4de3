use super::traits::ConfigSection;
use crate::error::{NetcascadeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Bonus added to a colored node's own tally each generation. The 1.5
    /// inherited from the historical rules is kept as a plain config value.
    pub self_weight: f64,
    /// Generation cap range; each trial draws its cap uniformly from
    /// [cap_min, cap_max] so the cutoff cannot be gamed.
    pub cap_min: usize,
    pub cap_max: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            self_weight: 1.5,
            cap_min: 100,
            cap_max: 200,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<()> {
        if self.self_weight < 0.0 {
            return Err(NetcascadeError::Configuration(
                "Self-reinforcement weight must not be negative".to_string(),
            ));
        }
        if self.cap_min == 0 {
            return Err(NetcascadeError::Configuration(
                "Generation cap must be at least 1".to_string(),
            ));
        }
        if self.cap_max < self.cap_min {
            return Err(NetcascadeError::Configuration(
                "Generation cap range is inverted".to_string(),
            ));
        }
        Ok(())
    }
}
