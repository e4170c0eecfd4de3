pub mod orchestrator;
pub mod report;

pub use orchestrator::TrialOrchestrator;
pub use report::{StrategyAverage, TrialReport};
