use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinetrack_core::error::CoreError;
use cinetrack_db::repositories::StoreError;
use serde::Serialize;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the API's JSON error envelope,
/// `{"error": <context>, "details": <cause>}`, with an additional `"body"`
/// echo of the rejected payload on mutation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request payload was rejected before reaching storage.
    #[error("{context}: {details}")]
    Validation {
        context: &'static str,
        details: String,
    },

    /// A storage operation failed.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StoreError,
        /// Echo of the request payload, where one was bound.
        body: Option<serde_json::Value>,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Validation failure with a fixed context and the core error as detail.
    pub fn validation(context: &'static str, source: CoreError) -> Self {
        Self::Validation {
            context,
            details: source.to_string(),
        }
    }

    /// Storage failure with no payload echo.
    pub fn storage(context: &'static str, source: StoreError) -> Self {
        Self::Storage {
            context,
            source,
            body: None,
        }
    }

    /// Storage failure echoing the rejected payload back to the caller.
    pub fn storage_with_body<T: Serialize>(
        context: &'static str,
        source: StoreError,
        body: &T,
    ) -> Self {
        Self::Storage {
            context,
            source,
            body: serde_json::to_value(body).ok(),
        }
    }
}

/// Body failures from the JSON extractor surface as 400 in the standard
/// envelope, not axum's stock 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            context: "Invalid watchlist data",
            details: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { context, details } => {
                let body = json!({
                    "error": context,
                    "details": details,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            AppError::Storage {
                context,
                source,
                body,
            } => {
                tracing::error!(error = %source, context, "Storage operation failed");
                let mut payload = json!({
                    "error": context,
                    "details": source.to_string(),
                });
                if let Some(echo) = body {
                    payload["body"] = echo;
                }
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
            }
        }
    }
}
