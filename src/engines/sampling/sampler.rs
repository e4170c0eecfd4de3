use super::filters::SignificanceFilter;
use crate::error::{NetcascadeError, Result};
use crate::engines::centrality::CentralitySet;
use crate::graph::NodeId;
use crate::types::{CompositeScore, SeedSchedule};
use rand::Rng;
use std::collections::HashSet;

/// Restrict sampling to the top `fraction` of nodes by composite score.
///
/// Nodes are ordered descending by score with ties broken by id, so the pool
/// (and the sampler's scan order over it) is deterministic for fixed scores.
pub fn candidate_pool(scores: &CompositeScore, fraction: f64) -> Vec<NodeId> {
    let mut ranked: Vec<(&NodeId, f64)> = scores.iter().map(|(node, &s)| (node, s)).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut keep = (fraction * ranked.len() as f64).ceil() as usize;
    keep = keep.min(ranked.len());

    ranked
        .into_iter()
        .take(keep)
        .map(|(node, _)| node.clone())
        .collect()
}

/// Weighted random seed admission over a restricted candidate pool.
///
/// Each round scans the pool in its fixed order, wrapping cyclically, and
/// admits a candidate when it is not yet in the round's set, passes every
/// significance filter, and wins an independent uniform draw against its
/// composite score. Rounds are independent and use fresh draws.
pub struct SeedSampler {
    seed_budget: usize,
    rounds: usize,
    filters: Vec<SignificanceFilter>,
}

impl SeedSampler {
    pub fn new(seed_budget: usize, rounds: usize) -> Self {
        Self {
            seed_budget,
            rounds,
            filters: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: Vec<SignificanceFilter>) -> Self {
        self.filters = filters;
        self
    }

    /// Produce one seed set per round, each of exactly `seed_budget`
    /// distinct pool nodes.
    ///
    /// Termination: admissible candidates (filter-passing, score > 0) are
    /// counted up front, and if fewer than `seed_budget` exist the call fails
    /// instead of scanning forever. Otherwise every full wrap of the pool
    /// retains a nonzero admission probability until the round fills.
    pub fn sample<R: Rng>(
        &self,
        pool: &[NodeId],
        scores: &CompositeScore,
        centralities: &CentralitySet,
        rng: &mut R,
    ) -> Result<SeedSchedule> {
        if self.seed_budget == 0 {
            return Err(NetcascadeError::Sampling(
                "seed budget must be positive".to_string(),
            ));
        }
        if pool.len() < self.seed_budget {
            return Err(NetcascadeError::InsufficientCandidates(format!(
                "candidate pool has {} nodes but {} seeds are required per round",
                pool.len(),
                self.seed_budget
            )));
        }

        let admissible = self.admissible(pool, scores, centralities);
        if admissible.len() < self.seed_budget {
            return Err(NetcascadeError::InsufficientCandidates(format!(
                "only {} of {} pool nodes are admissible (positive score, pass all filters) \
                 but {} seeds are required per round",
                admissible.len(),
                pool.len(),
                self.seed_budget
            )));
        }

        let mut rounds = Vec::with_capacity(self.rounds);
        for _ in 0..self.rounds {
            rounds.push(self.sample_round(pool, scores, &admissible, rng));
        }
        Ok(SeedSchedule::new(rounds))
    }

    fn sample_round<R: Rng>(
        &self,
        pool: &[NodeId],
        scores: &CompositeScore,
        admissible: &HashSet<NodeId>,
        rng: &mut R,
    ) -> Vec<NodeId> {
        let mut chosen: Vec<NodeId> = Vec::with_capacity(self.seed_budget);
        let mut taken: HashSet<&NodeId> = HashSet::with_capacity(self.seed_budget);
        let mut cursor = 0usize;

        while chosen.len() < self.seed_budget {
            let candidate = &pool[cursor % pool.len()];
            cursor += 1;

            if taken.contains(candidate) || !admissible.contains(candidate) {
                continue;
            }
            let score = scores.get(candidate).copied().unwrap_or(0.0);
            if rng.gen::<f64>() < score {
                taken.insert(candidate);
                chosen.push(candidate.clone());
            }
        }

        chosen
    }

    fn admissible(
        &self,
        pool: &[NodeId],
        scores: &CompositeScore,
        centralities: &CentralitySet,
    ) -> HashSet<NodeId> {
        let mut admissible: HashSet<NodeId> = pool
            .iter()
            .filter(|node| scores.get(*node).copied().unwrap_or(0.0) > 0.0)
            .cloned()
            .collect();

        for filter in &self.filters {
            let passing = filter.passing(pool, centralities);
            admissible.retain(|node| passing.contains(node));
        }

        admissible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::centrality::{CentralityMetric, CentralityVector};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scores(pairs: &[(&str, f64)]) -> CompositeScore {
        pairs
            .iter()
            .map(|(node, value)| (node.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_candidate_pool_takes_top_fraction() {
        let scores = scores(&[
            ("a", 0.9),
            ("b", 0.7),
            ("c", 0.5),
            ("d", 0.3),
            ("e", 0.1),
        ]);

        let pool = candidate_pool(&scores, 0.4);
        assert_eq!(pool, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_candidate_pool_breaks_ties_by_id() {
        let scores = scores(&[("b", 0.5), ("a", 0.5), ("c", 0.5)]);
        let pool = candidate_pool(&scores, 1.0);
        assert_eq!(
            pool,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_schedule_shape_invariant() {
        let scores = scores(&[("a", 0.9), ("b", 0.8), ("c", 0.7), ("d", 0.6)]);
        let pool = candidate_pool(&scores, 1.0);
        let mut rng = StdRng::seed_from_u64(7);

        let schedule = SeedSampler::new(2, 5)
            .sample(&pool, &scores, &CentralitySet::new(), &mut rng)
            .unwrap();

        assert_eq!(schedule.num_rounds(), 5);
        for round in schedule.rounds() {
            assert_eq!(round.len(), 2);
            let distinct: HashSet<_> = round.iter().collect();
            assert_eq!(distinct.len(), 2);
            for node in round {
                assert!(pool.contains(node));
            }
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_schedule() {
        let scores = scores(&[("a", 0.9), ("b", 0.6), ("c", 0.4)]);
        let pool = candidate_pool(&scores, 1.0);
        let sampler = SeedSampler::new(2, 10);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let first = sampler
            .sample(&pool, &scores, &CentralitySet::new(), &mut rng_a)
            .unwrap();
        let second = sampler
            .sample(&pool, &scores, &CentralitySet::new(), &mut rng_b)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pool_smaller_than_budget_errors() {
        let scores = scores(&[("a", 0.9)]);
        let pool = candidate_pool(&scores, 1.0);
        let mut rng = StdRng::seed_from_u64(1);

        let result = SeedSampler::new(2, 1).sample(&pool, &scores, &CentralitySet::new(), &mut rng);
        assert!(matches!(
            result,
            Err(NetcascadeError::InsufficientCandidates(_))
        ));
    }

    #[test]
    fn test_zero_scores_error_instead_of_looping() {
        let scores = scores(&[("a", 0.0), ("b", 0.0), ("c", 0.8)]);
        let pool = candidate_pool(&scores, 1.0);
        let mut rng = StdRng::seed_from_u64(1);

        let result = SeedSampler::new(2, 1).sample(&pool, &scores, &CentralitySet::new(), &mut rng);
        assert!(matches!(
            result,
            Err(NetcascadeError::InsufficientCandidates(_))
        ));
    }

    #[test]
    fn test_filtered_out_node_never_sampled() {
        let scores = scores(&[("a", 0.9), ("b", 0.9), ("c", 0.9)]);
        let pool = candidate_pool(&scores, 1.0);

        let vector: CentralityVector = [("a", 0.9), ("b", 0.5), ("c", 0.1)]
            .iter()
            .map(|(node, value)| (node.to_string(), *value))
            .collect();
        let mut centralities = CentralitySet::new();
        centralities.insert(CentralityMetric::Degree, vector);

        // Quantile 1.0 admits only the maximum-degree node, so budget 1 always picks "a".
        let sampler = SeedSampler::new(1, 20)
            .with_filters(vec![SignificanceFilter::new(CentralityMetric::Degree, 1.0)]);
        let mut rng = StdRng::seed_from_u64(3);
        let schedule = sampler
            .sample(&pool, &scores, &centralities, &mut rng)
            .unwrap();

        for round in schedule.rounds() {
            assert_eq!(round, &vec!["a".to_string()]);
        }
    }

    #[test]
    fn test_rounds_are_independent() {
        // With budget == pool size every round must contain the whole pool,
        // so each round restarts from an empty set rather than accumulating.
        let scores = scores(&[("a", 0.9), ("b", 0.2)]);
        let pool = candidate_pool(&scores, 1.0);
        let mut rng = StdRng::seed_from_u64(11);

        let schedule = SeedSampler::new(2, 4)
            .sample(&pool, &scores, &CentralitySet::new(), &mut rng)
            .unwrap();

        for round in schedule.rounds() {
            let distinct: HashSet<_> = round.iter().collect();
            assert_eq!(distinct.len(), 2);
        }
    }
}
