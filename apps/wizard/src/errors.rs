use thiserror::Error;

/// Crate-level error type.
/// Field validation problems are not errors here; see `form::validation::FieldError`.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid choice '{value}' for field '{field}'")]
    InvalidChoice { field: String, value: String },

    #[error("Submission is only possible on the final step (at step {current} of {total})")]
    NotAtFinalStep { current: usize, total: usize },

    #[error("Required fields are missing or invalid: {}", .0.join(", "))]
    StepIncomplete(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
