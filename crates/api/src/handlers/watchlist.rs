//! Handlers for the `/watchlist` resource.
//!
//! All successful responses are `200 OK`, including mutations that matched
//! no row. Storage failures, and lookups that match nothing, surface as
//! `500`; only payload validation reports `400`.

use axum::extract::{Path, State};
use cinetrack_core::watchlist::{validate_entry_fields, validate_entry_id};
use cinetrack_db::models::watchlist::{
    CreateWatchlistEntry, DeleteWatchlistEntry, UpdateWatchlistEntry, WatchlistEntry,
};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /api/v1/watchlist/all
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<WatchlistEntry>>> {
    let entries = state
        .store
        .list_all()
        .await
        .map_err(|err| AppError::storage("Failed to get watchlist", err))?;
    Ok(Json(entries))
}

/// GET /api/v1/watchlist/watched
pub async fn list_watched(State(state): State<AppState>) -> AppResult<Json<Vec<WatchlistEntry>>> {
    let entries = state
        .store
        .list_watched()
        .await
        .map_err(|err| AppError::storage("Failed to get watched list", err))?;
    Ok(Json(entries))
}

/// GET /api/v1/watchlist/watching
pub async fn list_watching(State(state): State<AppState>) -> AppResult<Json<Vec<WatchlistEntry>>> {
    let entries = state
        .store
        .list_watching()
        .await
        .map_err(|err| AppError::storage("Failed to get watching list", err))?;
    Ok(Json(entries))
}

/// GET /api/v1/watchlist/notwatched
pub async fn list_not_watched(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WatchlistEntry>>> {
    let entries = state
        .store
        .list_not_watched()
        .await
        .map_err(|err| AppError::storage("Failed to get not watched list", err))?;
    Ok(Json(entries))
}

/// GET /api/v1/watchlist/{watchlist_id}
///
/// The id is taken as raw text and matched against storage. An unknown or
/// malformed id is a storage miss, which reports as 500.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(watchlist_id): Path<String>,
) -> AppResult<Json<WatchlistEntry>> {
    let entry = state
        .store
        .get_by_id(&watchlist_id)
        .await
        .map_err(|err| AppError::storage("Failed to get watchlist entry by id", err))?;
    Ok(Json(entry))
}

/// POST /api/v1/watchlist/add
///
/// Responds with the stored entry, including its assigned id.
pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<CreateWatchlistEntry>,
) -> AppResult<Json<WatchlistEntry>> {
    validate_entry_fields(
        &input.title,
        input.release_year,
        &input.genre,
        &input.director,
        &input.status,
    )
    .map_err(|err| AppError::validation("Invalid watchlist data", err))?;

    let entry = state
        .store
        .insert(&input)
        .await
        .map_err(|err| AppError::storage_with_body("Failed to add watchlist entry", err, &input))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/watchlist/delete
///
/// Body-addressed: the target id arrives as JSON, not in the path. Deleting
/// an id that matches nothing still succeeds, with a zero count.
pub async fn delete(
    State(state): State<AppState>,
    Json(input): Json<DeleteWatchlistEntry>,
) -> AppResult<Json<MutationResponse<DeleteWatchlistEntry>>> {
    validate_entry_id(input.watchlist_id)
        .map_err(|err| AppError::validation("Invalid watchlist id", err))?;

    let rows_affected = state.store.delete(input.watchlist_id).await.map_err(|err| {
        AppError::storage_with_body("Failed to delete watchlist entry", err, &input)
    })?;
    Ok(Json(MutationResponse {
        message: "Watchlist entry deleted successfully",
        rows_affected,
        body: input,
    }))
}

/// PATCH /api/v1/watchlist/update
///
/// Replaces every field of the addressed entry except `added_date`.
/// Updating an id that matches nothing still succeeds, with a zero count.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateWatchlistEntry>,
) -> AppResult<Json<MutationResponse<UpdateWatchlistEntry>>> {
    validate_entry_id(input.watchlist_id)
        .map_err(|err| AppError::validation("Invalid watchlist data", err))?;
    validate_entry_fields(
        &input.title,
        input.release_year,
        &input.genre,
        &input.director,
        &input.status,
    )
    .map_err(|err| AppError::validation("Invalid watchlist data", err))?;

    let rows_affected = state.store.update(&input).await.map_err(|err| {
        AppError::storage_with_body("Failed to update watchlist entry", err, &input)
    })?;
    Ok(Json(MutationResponse {
        message: "Watchlist entry updated successfully",
        rows_affected,
        body: input,
    }))
}
