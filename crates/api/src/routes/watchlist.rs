//! Route definitions for the `/watchlist` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

/// Routes mounted at `/watchlist`.
///
/// ```text
/// GET    /all             -> list_all
/// GET    /watched         -> list_watched
/// GET    /watching        -> list_watching
/// GET    /notwatched      -> list_not_watched
/// GET    /{watchlist_id}  -> get_by_id
/// POST   /add             -> add
/// DELETE /delete          -> delete
/// PATCH  /update          -> update
/// ```
///
/// Static segments take priority over `{watchlist_id}`, so `/all` and the
/// filter routes never reach the id lookup.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(watchlist::list_all))
        .route("/watched", get(watchlist::list_watched))
        .route("/watching", get(watchlist::list_watching))
        .route("/notwatched", get(watchlist::list_not_watched))
        .route("/{watchlist_id}", get(watchlist::get_by_id))
        .route("/add", post(watchlist::add))
        .route("/delete", delete(watchlist::delete))
        .route("/update", patch(watchlist::update))
}
