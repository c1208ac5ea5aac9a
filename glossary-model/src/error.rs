//! Error types for the glossary model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while reading or writing glossary CSV files.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The CSV file could not be opened or created.
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure while flushing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file has no `id` column.
    #[error("CSV header is missing the `{0}` column")]
    MissingColumn(String),
}
