pub mod simulator;

pub use simulator::{ColorAssignment, PropagationSimulator, SimulationPhase};
