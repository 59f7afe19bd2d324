use reqwest::StatusCode;

/// Input rejected before the translation service is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no text to translate")]
    EmptyText,

    #[error("no destination language chosen")]
    NoDestination,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("invalid destination language: {0}")]
    UnsupportedLanguage(String),

    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {}: {message}", .status.as_u16())]
    Status { status: StatusCode, message: String },

    #[error("invalid response from translation service: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("history database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to prepare history location: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Errors that can stop the core from starting.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("protocol stream failed: {0}")]
    Io(#[from] std::io::Error),
}
