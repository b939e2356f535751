//! Error types for the receipt processor.

use thiserror::Error;

/// Result type alias for processor operations
pub type Result<T> = std::result::Result<T, ProcessorError>;

/// Errors that can occur while submitting or scoring receipts.
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    /// Submitted body is not a JSON receipt document
    #[error("Malformed receipt JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Receipt field failed validation
    #[error("Invalid receipt field `{field}`: {message}")]
    InvalidReceipt { field: String, message: String },

    /// No receipt stored under the requested id
    #[error("No receipt found for id {id}")]
    NotFound { id: String },

    /// Identifier generator kept producing ids that are already taken
    #[error("Could not generate a unique receipt id after {attempts} attempts")]
    IdGenerationExhausted { attempts: usize },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: receipt-processor <receipt.json>...")]
    MissingArgument,
}

impl ProcessorError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl ToString) -> Self {
        ProcessorError::InvalidReceipt {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Returns `true` for errors caused by the caller's input rather than the service.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ProcessorError::Json(_) | ProcessorError::InvalidReceipt { .. }
        )
    }
}
