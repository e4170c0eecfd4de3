pub mod centrality;
pub mod propagation;
pub mod sampling;
pub mod scoring;
pub mod trials;

pub use centrality::{BfsCentralityProvider, CentralityProvider};
pub use propagation::PropagationSimulator;
pub use sampling::{SeedSampler, SignificanceFilter};
pub use scoring::SeedScorer;
pub use trials::TrialOrchestrator;
