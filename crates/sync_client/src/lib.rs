pub use client::{CreateError, DEFAULT_DESCRIPTION, OpState, SyncClient};
pub use error::SyncError;

mod api;
mod client;
mod error;
