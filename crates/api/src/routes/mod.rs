pub mod health;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /watchlist/all              list every entry (GET)
/// /watchlist/watched          entries with status `watched` (GET)
/// /watchlist/watching         entries with status `watching` (GET)
/// /watchlist/notwatched       entries with status `not watched` (GET)
/// /watchlist/{watchlist_id}   single entry by id (GET)
/// /watchlist/add              create an entry (POST)
/// /watchlist/delete           delete an entry, id in the body (DELETE)
/// /watchlist/update           replace an entry, id in the body (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/watchlist", watchlist::router())
}
