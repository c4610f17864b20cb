use thiserror::Error;

/// Errors raised by the store adapter and collection manager.
///
/// Lookup failures are deliberately absent: catalog lookups collapse to
/// `None` so enrichment stays optional for callers.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The caller handed `add` an entry missing a required field.
    #[error("validation failed: missing required field '{0}'")]
    Validation(&'static str),

    /// A stored record exists but does not deserialize into the expected
    /// shape. Surfaced, never silently defaulted to empty, so data loss is
    /// not masked.
    #[error("stored record '{key}' is corrupt: {reason}")]
    StoreCorrupt { key: String, reason: String },

    /// The underlying substrate rejected a read.
    #[error("failed to read record '{key}'")]
    StoreRead {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying substrate rejected a write (e.g. quota, permissions).
    #[error("failed to write record '{key}'")]
    StoreWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl TrackerError {
    pub fn corrupt(key: &str, err: &serde_json::Error) -> Self {
        Self::StoreCorrupt {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }
}
