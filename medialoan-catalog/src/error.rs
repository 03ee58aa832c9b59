/// Errors surfaced by catalog loading and lookup-backed mutations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A malformed record aborts the whole load; no partial catalog
    /// is ever produced.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Duplicate content id {id} on line {line}")]
    DuplicateId { id: u32, line: usize },

    #[error("No content with id {0} in the catalog")]
    ContentNotFound(u32),
}

impl CatalogError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
