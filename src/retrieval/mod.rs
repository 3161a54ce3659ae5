//! Retrieval: candidate scoring, structured comparison, and the engine that
//! turns a classified query into fetched records plus derived payloads

pub mod compare;
pub mod engine;
pub mod ranking;

pub use compare::{diff, ComparisonResult, SpecDiff};
pub use engine::{RetrievalEngine, RetrievalResult};
pub use ranking::{rank, score};
