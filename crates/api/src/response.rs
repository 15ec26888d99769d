//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Acknowledgement envelope for delete and update operations.
///
/// `row-affected` carries the storage-reported count; zero means the
/// targeted id matched nothing, which is still a success. `body` echoes the
/// request payload back to the caller.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub message: &'static str,
    #[serde(rename = "row-affected")]
    pub rows_affected: u64,
    pub body: T,
}
