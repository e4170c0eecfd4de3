use crate::error::{NetcascadeError, Result};
use crate::graph::NodeId;
use crate::types::SeedSchedule;
use std::path::Path;

/// Seed persistence: one node id per line, rounds concatenated in order, so
/// a file holds `seed_budget * rounds` lines. Reading re-chunks the flat
/// sequence into rounds of `seed_budget`.
pub struct SeedFileConnector;

impl SeedFileConnector {
    pub fn write<P: AsRef<Path>>(path: P, schedule: &SeedSchedule) -> Result<()> {
        let mut contents = String::new();
        for seed in schedule.flatten() {
            contents.push_str(&seed);
            contents.push('\n');
        }
        std::fs::write(&path, contents).map_err(|e| {
            NetcascadeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write seed file {}: {}", path.as_ref().display(), e),
            ))
        })
    }

    pub fn read<P: AsRef<Path>>(path: P, seed_budget: usize) -> Result<SeedSchedule> {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            NetcascadeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read seed file {}: {}", path.as_ref().display(), e),
            ))
        })?;
        let flat: Vec<NodeId> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        SeedSchedule::from_flat(flat, seed_budget)
    }
}
