use reqwest::StatusCode;
use thiserror::Error;

/// Transport or backend failure during a list/create/delete call.
///
/// Never fatal: on a failed refresh the store keeps its previous contents,
/// and a failed create/delete leaves the records untouched. Recovery is an
/// explicit user retry; nothing is retried automatically.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
}
