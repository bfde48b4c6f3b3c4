//! Error taxonomy shared by the stores and host collaborators.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the UI as a panic. Store operations catch these at
//! the boundary, log them, and fall back to a safe default (logged out,
//! light theme, no toast).

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("storage read failed for `{key}`: {reason}")]
    StorageRead { key: String, reason: String },
    #[error("storage write failed for `{key}`: {reason}")]
    StorageWrite { key: String, reason: String },
    #[error("malformed value stored under `{key}`: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("identity provider sign-out failed: {0}")]
    ExternalSignOut(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl AuthError {
    pub(crate) fn read(key: &str, reason: impl ToString) -> Self {
        Self::StorageRead { key: key.to_owned(), reason: reason.to_string() }
    }

    pub(crate) fn write(key: &str, reason: impl ToString) -> Self {
        Self::StorageWrite { key: key.to_owned(), reason: reason.to_string() }
    }
}
