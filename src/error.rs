//! Error types
//!
//! Failures raised while validating input, building a panel, or exporting it.

use thiserror::Error;

/// Panel generation error types
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Invalid amount for {nutrient}: {reason}")]
    InvalidAmount { nutrient: String, reason: String },

    #[error("Servings per container must be a positive integer, got {0}")]
    InvalidServingsCount(i64),

    #[error("Unknown nutrient id: {0}")]
    UnknownNutrientId(String),

    #[error("Resolution must be between 72 and 600 dpi, got {0}")]
    InvalidResolution(u32),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PanelError {
    pub(crate) fn invalid_amount(nutrient: &str, reason: impl Into<String>) -> Self {
        PanelError::InvalidAmount {
            nutrient: nutrient.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix this by correcting their input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PanelError::InvalidAmount { .. }
                | PanelError::InvalidServingsCount(_)
                | PanelError::InvalidResolution(_)
        )
    }
}

/// Result type for panel operations
pub type PanelResult<T> = Result<T, PanelError>;
