pub mod filters;
pub mod sampler;

pub use filters::SignificanceFilter;
pub use sampler::{candidate_pool, SeedSampler};
