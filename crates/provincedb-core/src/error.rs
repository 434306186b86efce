// crates/provincedb-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, caching or parsing province data.
///
/// Lookups never fail: a missing match is an empty slice. Only the loader
/// and strict [`Locale`](crate::Locale) parsing produce these.
#[derive(Error, Debug)]
pub enum ProvinceError {
    /// Dataset file missing or unreadable at open time.
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Input is structurally fine but cannot be handled by this build
    /// (e.g. gzip input without the `compact` feature).
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown locale `{0}` (expected `en` or `th`)")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, ProvinceError>;
