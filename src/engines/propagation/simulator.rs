//! Influence propagation as a discrete-time cellular automaton.
//!
//! One run covers one trial: competing strategies color their seed nodes,
//! then every generation each node re-votes based on the colors its
//! neighbors held in the previous generation. Updates are synchronous —
//! generation `g + 1` is computed purely from a snapshot of generation `g`,
//! never from a mix of old and new values.
//!
//! A run halts at a fixed point (two identical consecutive generations) or
//! at a generation cap drawn once per trial from the configured range.
//! Hitting the cap is a best-effort stable outcome, not an error.

use crate::config::SimulationConfig;
use crate::error::{NetcascadeError, Result};
use crate::graph::{Graph, NodeId};
use crate::types::{SimulationOutcome, StrategyName};
use indexmap::IndexMap;
use rand::Rng;
use std::collections::{BTreeMap, HashMap};

/// Node-to-owner mapping for one generation. `None` = uncolored.
pub type ColorAssignment = BTreeMap<NodeId, Option<StrategyName>>;

/// Lifecycle of one trial run. There are no other terminal states:
/// cap exhaustion still ends in `Stable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    Uninitialized,
    Propagating,
    Stable,
}

pub struct PropagationSimulator<'g> {
    graph: &'g Graph,
    config: SimulationConfig,
}

impl<'g> PropagationSimulator<'g> {
    pub fn new(graph: &'g Graph, config: SimulationConfig) -> Self {
        Self { graph, config }
    }

    /// Run one trial with the given per-strategy seed sets.
    ///
    /// Seed ids are validated before any state is built: an id absent from
    /// the graph fails the trial with [`NetcascadeError::InvalidSeed`].
    pub fn run<R: Rng>(
        &self,
        seed_sets: &IndexMap<StrategyName, Vec<NodeId>>,
        rng: &mut R,
    ) -> Result<SimulationOutcome> {
        let cap = rng.gen_range(self.config.cap_min..=self.config.cap_max);

        let mut phase = SimulationPhase::Uninitialized;
        let mut colors = ColorAssignment::new();
        let mut generation = 0usize;
        let mut converged = false;

        while phase != SimulationPhase::Stable {
            match phase {
                SimulationPhase::Uninitialized => {
                    self.validate_seeds(seed_sets)?;
                    colors = self.initialize(seed_sets);
                    phase = SimulationPhase::Propagating;
                }
                SimulationPhase::Propagating => {
                    let next = self.step(&colors);
                    generation += 1;
                    if next == colors || generation >= cap {
                        converged = next == colors;
                        phase = SimulationPhase::Stable;
                    }
                    colors = next;
                }
                SimulationPhase::Stable => break,
            }
        }

        log::debug!(
            "propagation halted after {} generations (cap {}, converged: {})",
            generation,
            cap,
            converged
        );

        Ok(SimulationOutcome {
            counts: tally(seed_sets.keys(), &colors),
            generations: generation,
            converged,
        })
    }

    fn validate_seeds(&self, seed_sets: &IndexMap<StrategyName, Vec<NodeId>>) -> Result<()> {
        for (strategy, seeds) in seed_sets {
            for node in seeds {
                if !self.graph.contains(node) {
                    return Err(NetcascadeError::InvalidSeed {
                        node: node.clone(),
                        strategy: strategy.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Color each strategy's seeds. A node claimed more than once (by rival
    /// strategies seeding it simultaneously) ends uncolored: first-claim
    /// conflicts cancel out rather than picking a winner.
    fn initialize(&self, seed_sets: &IndexMap<StrategyName, Vec<NodeId>>) -> ColorAssignment {
        let mut colors: ColorAssignment = self
            .graph
            .nodes()
            .map(|node| (node.clone(), None))
            .collect();
        let mut conflicted: Vec<NodeId> = Vec::new();

        for (strategy, seeds) in seed_sets {
            for node in seeds {
                let slot = colors.get_mut(node).unwrap();
                if slot.is_some() {
                    conflicted.push(node.clone());
                } else {
                    *slot = Some(strategy.clone());
                }
            }
        }
        for node in conflicted {
            colors.insert(node, None);
        }

        colors
    }

    /// Synchronous majority-vote update over all nodes.
    fn step(&self, prev: &ColorAssignment) -> ColorAssignment {
        prev.iter()
            .map(|(node, current)| {
                let next = self.vote(node, current.as_ref(), prev);
                (node.clone(), next)
            })
            .collect()
    }

    /// Tally the colors of a node's colored neighbors, with a
    /// self-reinforcement bonus for the node's own current color. The top
    /// color is adopted only when it is the unique maximum and its tally
    /// strictly exceeds half the colored-neighbor count; any tie for the top
    /// leaves the node unchanged.
    fn vote(
        &self,
        node: &NodeId,
        current: Option<&StrategyName>,
        prev: &ColorAssignment,
    ) -> Option<StrategyName> {
        let mut tallies: HashMap<&StrategyName, f64> = HashMap::new();
        let mut colored_neighbors = 0usize;

        for neighbor in self.graph.neighbors(node) {
            if let Some(Some(color)) = prev.get(neighbor) {
                *tallies.entry(color).or_insert(0.0) += 1.0;
                colored_neighbors += 1;
            }
        }
        if let Some(own) = current {
            *tallies.entry(own).or_insert(0.0) += self.config.self_weight;
        }

        let mut best: Option<(&StrategyName, f64)> = None;
        let mut tied = false;
        for (color, &tally) in &tallies {
            match best {
                None => best = Some((color, tally)),
                Some((_, best_tally)) => {
                    if tally > best_tally {
                        best = Some((color, tally));
                        tied = false;
                    } else if tally == best_tally {
                        tied = true;
                    }
                }
            }
        }

        match best {
            Some((color, tally)) if !tied && tally > colored_neighbors as f64 / 2.0 => {
                Some(color.clone())
            }
            _ => current.cloned(),
        }
    }
}

fn tally<'a>(
    strategies: impl Iterator<Item = &'a StrategyName>,
    colors: &ColorAssignment,
) -> HashMap<StrategyName, usize> {
    let mut counts: HashMap<StrategyName, usize> =
        strategies.map(|name| (name.clone(), 0)).collect();
    for color in colors.values().flatten() {
        if let Some(count) = counts.get_mut(color) {
            *count += 1;
        }
    }
    counts
}
