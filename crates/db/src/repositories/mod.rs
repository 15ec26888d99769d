//! Repository layer.
//!
//! [`WatchlistStore`] is the capability set the HTTP layer consumes;
//! [`WatchlistRepo`] is its SQLite-backed implementation. Tests substitute
//! an in-memory double behind the same trait.

pub mod watchlist_repo;

pub use watchlist_repo::{StoreError, WatchlistRepo, WatchlistStore};
