use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuelError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid {field} ({value}): {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: f64,
        reason: String,
    },

    /// A transition the presentation layer should never attempt: submitting
    /// into a locked round, a mistyped entry, or malformed restored data.
    #[error("workflow invariant violated: {message}")]
    InvariantViolation { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FuelError {
    pub fn invariant(message: impl Into<String>) -> Self {
        FuelError::InvariantViolation {
            message: message.into(),
        }
    }

    /// True for errors the user recovers from by correcting the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FuelError::MissingField { .. } | FuelError::InvalidFieldValue { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FuelError>;
