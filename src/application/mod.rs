pub mod enrichment;
pub mod song;
