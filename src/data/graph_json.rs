use crate::error::{NetcascadeError, Result};
use crate::graph::{Graph, NodeId};
use std::collections::BTreeMap;
use std::path::Path;

/// Loads competition graphs stored as a JSON adjacency object:
/// `{"2": ["6", "3", "7"], "3": ["2", "7", "12"], ...}`.
pub struct JsonGraphConnector;

impl JsonGraphConnector {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Graph> {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            NetcascadeError::Graph(format!(
                "Failed to read graph file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Graph> {
        let adjacency: BTreeMap<NodeId, Vec<NodeId>> = serde_json::from_str(contents)?;
        if adjacency.is_empty() {
            return Err(NetcascadeError::Graph(
                "Graph file contains no nodes".to_string(),
            ));
        }
        Ok(Graph::from_adjacency(adjacency))
    }
}
