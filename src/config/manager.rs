use super::{
    sampling::SamplingConfig,
    scoring::StrategySpec,
    simulation::SimulationConfig,
    traits::ConfigSection,
    trials::TrialConfig,
};
use crate::error::{NetcascadeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the JSON adjacency file for the competition graph.
    pub graph_path: String,
    /// Competing strategies, one schedule each; order here is the ranking
    /// tie-break order.
    pub strategies: Vec<StrategySpec>,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub trials: TrialConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graph_path: String::new(),
            strategies: Vec::new(),
            sampling: SamplingConfig::default(),
            simulation: SimulationConfig::default(),
            trials: TrialConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.graph_path.is_empty() {
            return Err(NetcascadeError::Configuration(
                "A graph path is required".to_string(),
            ));
        }
        if self.strategies.is_empty() {
            return Err(NetcascadeError::Configuration(
                "At least one strategy is required".to_string(),
            ));
        }
        let mut names: Vec<&str> = self.strategies.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.strategies.len() {
            return Err(NetcascadeError::Configuration(
                "Strategy names must be unique".to_string(),
            ));
        }
        for strategy in &self.strategies {
            strategy.scoring.validate()?;
        }
        self.sampling.validate()?;
        self.simulation.validate()?;
        self.trials.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NetcascadeError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| NetcascadeError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| NetcascadeError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| NetcascadeError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.graph_path = "graphs/2.5.01.json".to_string();
        config.strategies = vec![
            StrategySpec {
                name: "degree-heavy".to_string(),
                scoring: Default::default(),
            },
            StrategySpec {
                name: "balanced".to_string(),
                scoring: Default::default(),
            },
        ];
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_missing_strategies_rejected() {
        let mut config = sample_config();
        config.strategies.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_strategy_names_rejected() {
        let mut config = sample_config();
        config.strategies[1].name = config.strategies[0].name.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_sections_rejected() {
        let mut config = sample_config();
        config.sampling.pool_fraction = 1.5;
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.simulation.cap_max = config.simulation.cap_min - 1;
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.trials.num_trials = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = sample_config();
        config.strategies[0].scoring.degree = 2.0;
        config.strategies[0].scoring.betweenness = 0.0;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.graph_path, config.graph_path);
        assert_eq!(parsed.strategies.len(), 2);
        assert_eq!(parsed.strategies[0].scoring.degree, 2.0);
        assert_eq!(parsed.strategies[0].scoring.betweenness, 0.0);
        assert_eq!(parsed.sampling.seed_budget, config.sampling.seed_budget);
    }

    #[test]
    fn test_manager_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netcascade.toml");

        let manager = ConfigManager::new();
        manager
            .update(|config| *config = sample_config())
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let loaded = ConfigManager::new();
        loaded.load_from_file(&path).unwrap();
        assert_eq!(loaded.get().graph_path, "graphs/2.5.01.json");
        assert_eq!(loaded.get().strategies.len(), 2);
    }

    #[test]
    fn test_partial_toml_uses_section_defaults() {
        let toml_str = r#"
            graph_path = "graphs/tiny.json"

            [[strategies]]
            name = "solo"
        "#;

        let parsed: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.sampling.rounds, 50);
        assert_eq!(parsed.simulation.cap_min, 100);
        assert_eq!(parsed.trials.num_trials, 50);
    }
}
