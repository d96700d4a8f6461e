//! Shared error types for the services crate.

use thiserror::Error;

use samskrita_core::model::{ContentValidationError, TopicId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `ContentGenerator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("content generation returned an empty response")]
    EmptyResponse,
    #[error("content generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response failed validation: {0}")]
    Invalid(#[from] ContentValidationError),
    #[error("generated lesson is still marked as a placeholder")]
    PlaceholderContent,
}

/// Errors emitted by `ProgressTracker`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("topic {0} is not in the catalog")]
    UnknownTopic(TopicId),
    #[error("could not encode progress: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ViewController` when an intent cannot start.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("another lesson is still loading")]
    Busy,
    #[error("screens can only be opened from home")]
    NotAtHome,
    #[error("topic {0} is not in the catalog")]
    UnknownTopic(TopicId),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
