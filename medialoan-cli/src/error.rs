use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog could not be loaded or an operation failed
    #[error("{0}")]
    Catalog(#[from] medialoan_catalog::CatalogError),

    /// Bad command-line input
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
