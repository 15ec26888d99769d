//! Request body extraction.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor that reports failures as [`AppError`].
///
/// Axum's stock `Json` rejects malformed bodies with `422 Unprocessable
/// Entity`; this API promises `400` in the standard error envelope, so
/// handlers take this wrapper instead. It doubles as a response type,
/// delegating serialization to `axum::Json`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        let Self(value) = self;
        axum::Json(value).into_response()
    }
}
