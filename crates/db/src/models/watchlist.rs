//! Watchlist entry model and DTOs.

use cinetrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `Watchlist` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub watchlist_id: DbId,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
    pub status: String,
    /// Stored verbatim from the create request; never touched by updates.
    pub added_date: Timestamp,
}

/// DTO for creating a new entry. Every field is required; the id is assigned
/// by storage.
///
/// `Serialize` is derived so failed requests can echo the payload back to the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWatchlistEntry {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
    pub status: String,
    pub added_date: Timestamp,
}

/// DTO for replacing an existing entry wholesale.
///
/// Carries the full set of replacement values, not a partial patch. A
/// caller-supplied `added_date` is accepted and ignored; the stored value
/// is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWatchlistEntry {
    pub watchlist_id: DbId,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_date: Option<Timestamp>,
}

/// DTO for deleting an entry by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteWatchlistEntry {
    pub watchlist_id: DbId,
}
