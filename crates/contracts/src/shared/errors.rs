use thiserror::Error;

/// Errors of the key-value storage behind the settings store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors of `SettingsStore::save`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Please enter both Key & URL.")]
    Validation,

    #[error("Could not save settings: {0}")]
    Storage(#[from] StorageError),
}

/// Failure to obtain any HTTP response at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// Outcome classification of one send
#[derive(Debug, Error)]
pub enum SendError {
    #[error("API Error: {0}")]
    RemoteApi(String),

    #[error("response contained no candidate text")]
    MalformedResponse,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}
