//! CLI error types.

use folio_config::ConfigError;
use folio_site::AssemblyError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Assembly(#[from] AssemblyError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize site configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
