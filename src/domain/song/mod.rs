pub mod enrichment;
pub mod model;
pub mod repo;

pub use model::*;
