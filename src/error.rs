use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetcascadeError {
    #[error("Invalid seed node '{node}' for strategy '{strategy}': not present in graph")]
    InvalidSeed { node: String, strategy: String },

    #[error("Insufficient candidates: {0}")]
    InsufficientCandidates(String),

    #[error("Missing {metric} centrality for node '{node}'")]
    MissingCentrality { metric: String, node: String },

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Sampling error: {0}")]
    Sampling(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetcascadeError>;
