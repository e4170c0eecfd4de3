use crate::error::{NetcascadeError, Result};
use crate::graph::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of a competing seed-selection strategy.
pub type StrategyName = String;

/// Composite importance score per node, each value in [0, 1].
pub type CompositeScore = HashMap<NodeId, f64>;

/// An ordered sequence of per-round seed sets.
///
/// Fully materialized before simulation begins; round `i` supplies the seeds
/// for trial `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSchedule {
    rounds: Vec<Vec<NodeId>>,
}

impl SeedSchedule {
    pub fn new(rounds: Vec<Vec<NodeId>>) -> Self {
        Self { rounds }
    }

    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn round(&self, index: usize) -> Option<&[NodeId]> {
        self.rounds.get(index).map(Vec::as_slice)
    }

    pub fn rounds(&self) -> &[Vec<NodeId>] {
        &self.rounds
    }

    /// Flatten to the persistence form: round order, seeds in admission order.
    pub fn flatten(&self) -> Vec<NodeId> {
        self.rounds.iter().flatten().cloned().collect()
    }

    /// Rebuild a schedule by chunking a flat seed sequence into rounds of
    /// `seed_budget` entries each.
    pub fn from_flat(flat: Vec<NodeId>, seed_budget: usize) -> Result<Self> {
        if seed_budget == 0 {
            return Err(NetcascadeError::Sampling(
                "seed budget must be positive".to_string(),
            ));
        }
        if flat.len() % seed_budget != 0 {
            return Err(NetcascadeError::Sampling(format!(
                "flat seed sequence of length {} is not divisible by seed budget {}",
                flat.len(),
                seed_budget
            )));
        }
        let rounds = flat
            .chunks(seed_budget)
            .map(|chunk| chunk.to_vec())
            .collect();
        Ok(Self { rounds })
    }
}

/// Outcome of a single propagation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Final node count per strategy; strategies that lost every node are
    /// present with a count of 0. Uncolored nodes are counted nowhere.
    pub counts: HashMap<StrategyName, usize>,
    /// Generations actually stepped before halting.
    pub generations: usize,
    /// False when the generation cap was hit before a fixed point.
    pub converged: bool,
}

/// One completed trial: the tallies plus the seed sets that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialResult {
    pub trial: usize,
    pub counts: HashMap<StrategyName, usize>,
    pub seeds: IndexMap<StrategyName, Vec<NodeId>>,
    pub generations: usize,
    pub converged: bool,
}

/// A trial aborted by a per-trial error. The rest of the batch continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialFailure {
    pub trial: usize,
    pub message: String,
}
