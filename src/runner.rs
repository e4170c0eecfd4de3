use crate::config::{AppConfig, SamplingConfig};
use crate::data::JsonGraphConnector;
use crate::engines::centrality::{BfsCentralityProvider, CentralityProvider};
use crate::engines::sampling::{candidate_pool, SeedSampler, SignificanceFilter};
use crate::engines::scoring::SeedScorer;
use crate::engines::trials::{TrialOrchestrator, TrialReport};
use crate::error::Result;
use crate::graph::Graph;
use crate::types::SeedSchedule;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Full batch pipeline: load the graph, score and sample a schedule per
/// strategy, then run the trial batch and aggregate the report.
pub fn run_competition(config: &AppConfig) -> Result<TrialReport> {
    config.validate()?;
    let graph = JsonGraphConnector::load(&config.graph_path)?;
    run_competition_on(&graph, config)
}

/// Same pipeline over an already-loaded graph.
pub fn run_competition_on(graph: &Graph, config: &AppConfig) -> Result<TrialReport> {
    let centralities = BfsCentralityProvider::default().compute(graph)?;
    log::info!(
        "computed {} centrality metrics for {} nodes",
        centralities.metrics().len(),
        graph.node_count()
    );

    let mut rng = match config.trials.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut schedules: IndexMap<String, SeedSchedule> = IndexMap::new();
    for strategy in &config.strategies {
        let scorer = SeedScorer::with_weights(strategy.scoring.weight_map());
        let scores = scorer.score(graph, &centralities);
        let pool = candidate_pool(&scores, config.sampling.pool_fraction);
        log::info!(
            "strategy '{}': candidate pool of {} nodes",
            strategy.name,
            pool.len()
        );

        let sampler = SeedSampler::new(config.sampling.seed_budget, config.sampling.rounds)
            .with_filters(significance_filters(&config.sampling));
        let schedule = sampler.sample(&pool, &scores, &centralities, &mut rng)?;
        schedules.insert(strategy.name.clone(), schedule);
    }

    let orchestrator = TrialOrchestrator::new(config.trials.clone(), config.simulation.clone());
    Ok(orchestrator.run_trials(graph, &schedules))
}

fn significance_filters(sampling: &SamplingConfig) -> Vec<SignificanceFilter> {
    sampling
        .filter_metrics
        .iter()
        .map(|&metric| SignificanceFilter::new(metric, sampling.significance_quantile))
        .collect()
}
