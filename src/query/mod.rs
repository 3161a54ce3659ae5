//! Query understanding: tokenization, intent/criteria extraction, and
//! fuzzy model-name resolution
//!
//! Everything in this module is pure text-in, structure-out. Matching is an
//! explicit tokenizer plus small deterministic pattern rules so each rule can
//! be tested on its own.

pub mod criteria;
pub mod lexer;
pub mod resolver;

pub use criteria::{classify, CriteriaSet, Focus, Intent};
pub use resolver::{resolve_names, MatchCandidate};
