use super::report::{StrategyAverage, TrialReport};
use crate::config::{SimulationConfig, TrialConfig};
use crate::engines::propagation::PropagationSimulator;
use crate::graph::{Graph, NodeId};
use crate::types::{SeedSchedule, StrategyName, TrialFailure, TrialResult};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Runs many independent trials and aggregates per-strategy averages.
///
/// Trial `i` takes each strategy's `i`-th seed set (or an empty set when a
/// schedule is shorter than the trial count, so uneven schedules still
/// compare fairly) and invokes the simulator once. Trials share nothing but
/// the read-only graph, so they run on the rayon pool; per-trial RNGs are
/// derived from the orchestrator seed, which keeps parallel runs
/// reproducible, and results are re-sorted by trial index afterwards.
///
/// A failed trial is recorded and skipped in the averages; it never aborts
/// the batch.
pub struct TrialOrchestrator {
    trial_config: TrialConfig,
    simulation_config: SimulationConfig,
}

impl TrialOrchestrator {
    pub fn new(trial_config: TrialConfig, simulation_config: SimulationConfig) -> Self {
        Self {
            trial_config,
            simulation_config,
        }
    }

    pub fn run_trials(
        &self,
        graph: &Graph,
        schedules: &IndexMap<StrategyName, SeedSchedule>,
    ) -> TrialReport {
        let base_seed = self
            .trial_config
            .seed
            .unwrap_or_else(|| StdRng::from_entropy().gen());
        let num_trials = self.trial_config.num_trials;

        log::info!(
            "running {} trials over {} strategies on {} nodes",
            num_trials,
            schedules.len(),
            graph.node_count()
        );

        let outcomes: Vec<std::result::Result<TrialResult, TrialFailure>> = (0..num_trials)
            .into_par_iter()
            .map(|trial| {
                let seed_sets = select_seed_sets(schedules, trial);
                let simulator = PropagationSimulator::new(graph, self.simulation_config.clone());
                let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(trial as u64));

                match simulator.run(&seed_sets, &mut rng) {
                    Ok(outcome) => Ok(TrialResult {
                        trial,
                        counts: outcome.counts,
                        seeds: seed_sets,
                        generations: outcome.generations,
                        converged: outcome.converged,
                    }),
                    Err(error) => Err(TrialFailure {
                        trial,
                        message: error.to_string(),
                    }),
                }
            })
            .collect();

        let mut trials = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(result) => trials.push(result),
                Err(failure) => {
                    log::warn!("trial {} failed: {}", failure.trial, failure.message);
                    failures.push(failure);
                }
            }
        }
        trials.sort_by_key(|t| t.trial);
        failures.sort_by_key(|f| f.trial);

        let averages = rank_strategies(schedules, &trials);

        TrialReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            trials,
            failures,
            averages,
        }
    }
}

fn select_seed_sets(
    schedules: &IndexMap<StrategyName, SeedSchedule>,
    trial: usize,
) -> IndexMap<StrategyName, Vec<NodeId>> {
    schedules
        .iter()
        .map(|(name, schedule)| {
            let seeds = schedule
                .round(trial)
                .map(<[NodeId]>::to_vec)
                .unwrap_or_default();
            (name.clone(), seeds)
        })
        .collect()
}

/// Mean node count per strategy over succeeded trials, ranked descending.
/// The sort is stable, so tied strategies keep their original ordering.
fn rank_strategies(
    schedules: &IndexMap<StrategyName, SeedSchedule>,
    trials: &[TrialResult],
) -> Vec<StrategyAverage> {
    let mut averages: Vec<StrategyAverage> = schedules
        .keys()
        .map(|strategy| {
            let total: usize = trials
                .iter()
                .filter_map(|t| t.counts.get(strategy))
                .sum();
            let mean_nodes = if trials.is_empty() {
                0.0
            } else {
                total as f64 / trials.len() as f64
            };
            StrategyAverage {
                strategy: strategy.clone(),
                mean_nodes,
            }
        })
        .collect();

    averages.sort_by(|a, b| {
        b.mean_nodes
            .partial_cmp(&a.mean_nodes)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    averages
}
