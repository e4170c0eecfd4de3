pub mod scorer;

pub use scorer::SeedScorer;
