pub mod manager;
pub mod sampling;
pub mod scoring;
pub mod simulation;
pub mod traits;
pub mod trials;

pub use manager::{AppConfig, ConfigManager};
pub use sampling::SamplingConfig;
pub use scoring::{ScoringConfig, StrategySpec};
pub use simulation::SimulationConfig;
pub use traits::ConfigSection;
pub use trials::TrialConfig;
