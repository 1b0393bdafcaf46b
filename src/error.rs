//! Error taxonomy for the engine.
//!
//! Every externally surfaced failure maps to one of these types with a stable
//! user-facing message. All of them are non-fatal: the shell reports them and
//! keeps running.

use thiserror::Error;

/// The persistent store could not be written. Read-side corruption is not an
/// error: a corrupt payload loads as an empty history instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serializing a payload for persistence failed.
    #[error("failed to serialize payload for storage: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage backend rejected the operation (connection gone, write
    /// failed, migration mismatch).
    #[error("storage backend failure: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Dataset parsing failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Parsing produced zero valid examples. A header-only or all-blank file
    /// fails this way too; an empty dataset is never a success.
    #[error("dataset contains no usable examples")]
    Empty,
}

/// Failures at the classifier boundary.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// `classify` was called before `initialize`.
    #[error("classifier is not initialized")]
    NotReady,

    /// The classifier returned an empty score list.
    #[error("classifier returned no results")]
    NoResults,

    /// A score was missing or non-finite for the named label.
    #[error("classifier returned a malformed score for label '{label}'")]
    MalformedScore { label: String },

    /// The underlying model call itself failed.
    #[error("classifier backend failure: {0}")]
    Backend(String),
}
