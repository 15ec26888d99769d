//! Repository for the `Watchlist` table.

use async_trait::async_trait;
use cinetrack_core::types::DbId;
use cinetrack_core::watchlist::{STATUS_NOT_WATCHED, STATUS_WATCHED, STATUS_WATCHING};
use thiserror::Error;

use crate::models::watchlist::{CreateWatchlistEntry, UpdateWatchlistEntry, WatchlistEntry};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "watchlist_id, title, release_year, genre, director, status, added_date";

/// Errors surfaced by watchlist storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the requested id. Non-numeric id text also lands here,
    /// since it matches no row rather than failing to parse.
    #[error("no matching watchlist entry")]
    NotFound,
    /// The underlying database rejected or failed the query.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Storage operations backing the watchlist endpoints.
///
/// Handlers depend on this trait rather than a concrete pool, so tests can
/// substitute an in-memory implementation.
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// List every entry, ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<WatchlistEntry>, StoreError>;

    /// List entries whose status is exactly `watched`, ordered by ascending id.
    async fn list_watched(&self) -> Result<Vec<WatchlistEntry>, StoreError>;

    /// List entries whose status is exactly `watching`, ordered by ascending id.
    async fn list_watching(&self) -> Result<Vec<WatchlistEntry>, StoreError>;

    /// List entries whose status is exactly `not watched`, ordered by
    /// ascending id.
    async fn list_not_watched(&self) -> Result<Vec<WatchlistEntry>, StoreError>;

    /// Fetch a single entry by the id text taken from the request path.
    ///
    /// The text is bound as-is. Text that does not name an existing id,
    /// numeric or not, reports [`StoreError::NotFound`].
    async fn get_by_id(&self, id: &str) -> Result<WatchlistEntry, StoreError>;

    /// Insert a new entry, returning the stored row with its generated id.
    ///
    /// `added_date` is stored exactly as supplied.
    async fn insert(&self, input: &CreateWatchlistEntry) -> Result<WatchlistEntry, StoreError>;

    /// Replace every mutable field of the entry named by `input.watchlist_id`.
    ///
    /// `added_date` is left untouched. Returns the number of rows updated,
    /// which is 0 when no row has that id.
    async fn update(&self, input: &UpdateWatchlistEntry) -> Result<u64, StoreError>;

    /// Delete the entry with the given id.
    ///
    /// Returns the number of rows deleted, which is 0 when no row has that id.
    async fn delete(&self, id: DbId) -> Result<u64, StoreError>;
}

/// SQLite-backed [`WatchlistStore`].
pub struct WatchlistRepo {
    pool: DbPool,
}

impl WatchlistRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Shared query behind the three status-filtered lists.
    async fn list_by_status(&self, status: &str) -> Result<Vec<WatchlistEntry>, StoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM Watchlist WHERE status = $1 ORDER BY watchlist_id");
        let entries = sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }
}

#[async_trait]
impl WatchlistStore for WatchlistRepo {
    async fn list_all(&self) -> Result<Vec<WatchlistEntry>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM Watchlist ORDER BY watchlist_id");
        let entries = sqlx::query_as::<_, WatchlistEntry>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    async fn list_watched(&self) -> Result<Vec<WatchlistEntry>, StoreError> {
        self.list_by_status(STATUS_WATCHED).await
    }

    async fn list_watching(&self) -> Result<Vec<WatchlistEntry>, StoreError> {
        self.list_by_status(STATUS_WATCHING).await
    }

    async fn list_not_watched(&self) -> Result<Vec<WatchlistEntry>, StoreError> {
        self.list_by_status(STATUS_NOT_WATCHED).await
    }

    async fn get_by_id(&self, id: &str) -> Result<WatchlistEntry, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM Watchlist WHERE watchlist_id = $1");
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, input: &CreateWatchlistEntry) -> Result<WatchlistEntry, StoreError> {
        let query = format!(
            "INSERT INTO Watchlist (title, release_year, genre, director, status, added_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.genre)
            .bind(&input.director)
            .bind(&input.status)
            .bind(input.added_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(entry)
    }

    async fn update(&self, input: &UpdateWatchlistEntry) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE Watchlist SET
                title = $2,
                release_year = $3,
                genre = $4,
                director = $5,
                status = $6
             WHERE watchlist_id = $1",
        )
        .bind(input.watchlist_id)
        .bind(&input.title)
        .bind(input.release_year)
        .bind(&input.genre)
        .bind(&input.director)
        .bind(&input.status)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: DbId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM Watchlist WHERE watchlist_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
