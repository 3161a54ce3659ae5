//! Phone catalog: record type, spec-field parsers, and the record store
//!
//! The store is a read-mostly capability behind the [`PhoneStore`] trait so
//! the advisor can be wired against the shipped in-memory implementation or
//! anything else that can answer name and price lookups. Catalog population
//! (scraping, refresh) is outside this crate; the seed file is static data.

pub mod store;
pub mod types;

pub use store::{InMemoryStore, PhoneStore};
pub use types::{PhoneRecord, SpecField};
