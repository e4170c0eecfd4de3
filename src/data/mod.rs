pub mod graph_json;
pub mod seed_file;

pub use graph_json::JsonGraphConnector;
pub use seed_file::SeedFileConnector;
