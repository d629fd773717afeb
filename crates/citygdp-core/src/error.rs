// crates/citygdp-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by dataset acquisition and by string parsing of query
/// parameters.
///
/// Analytics and pipeline operations never return these: missing data falls
/// back to sentinel values there.
#[derive(Debug, Error)]
pub enum CityGdpError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON with a bad value; `path` is e.g. `cities[0].population`.
    #[error("invalid value at {path}: {source}")]
    Field {
        path: String,
        source: serde_json::Error,
    },

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown sort key: {0:?} (expected gdp-desc, gdp-asc, growth-desc or name)")]
    UnknownSortKey(String),

    #[error("unknown region: {0:?}")]
    UnknownRegion(String),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for CityGdpError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let at_root = err.path().iter().next().is_none();
        let path = err.path().to_string();
        let source = err.into_inner();
        if at_root || !source.is_data() {
            CityGdpError::Json(source)
        } else {
            CityGdpError::Field { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, CityGdpError>;
