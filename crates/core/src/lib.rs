//! Domain types and validation shared by the db and api crates.
//!
//! Lives at the bottom of the dependency graph: no internal dependencies,
//! pure functions only.

pub mod error;
pub mod types;
pub mod watchlist;
