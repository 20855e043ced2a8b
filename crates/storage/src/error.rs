use thiserror::Error;

/// Storage failure.
///
/// None of these are fatal to a session: reads degrade to an empty
/// collection and writes leave the in-memory state authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage IO error for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage quota exceeded writing `{key}`: needs {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode inventory: {0}")]
    Decode(#[source] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }
}
