mod config_error;
mod ingest_error;

pub use config_error::ConfigError;
pub use ingest_error::IngestError;

/// Convenience alias used across every Causeway crate.
pub type CausewayResult<T> = Result<T, CausewayError>;

/// Top-level error type.
///
/// Query misses are not errors; they come back as `None`. This type covers
/// configuration and source failures, which adapters absorb at their
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error("ingest error: {0}")]
    IngestError(#[from] IngestError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
