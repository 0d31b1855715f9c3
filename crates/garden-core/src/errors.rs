//! Error types for garden-graph.

use thiserror::Error;

/// Unified error type for all garden-graph operations.
///
/// The coloring engine and the layout function are total over their stated
/// preconditions and never return errors; errors arise at the data-model
/// boundary (edge construction, palette and layout configuration).
#[derive(Error, Debug)]
pub enum GardenError {
    /// Input validation errors (self-loop edges, malformed vertex references)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl GardenError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        GardenError::ValidationError(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        GardenError::ConfigError(message.into())
    }
}

/// Result type alias for garden-graph operations.
pub type Result<T> = std::result::Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let validation_err = GardenError::validation("Self-loop edge (2, 2)");
        assert!(matches!(validation_err, GardenError::ValidationError(_)));

        let config_err = GardenError::config("Layout radius must be positive");
        assert!(matches!(config_err, GardenError::ConfigError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = GardenError::validation("bad edge");
        assert_eq!(err.to_string(), "Validation error: bad edge");

        let err = GardenError::config("bad radius");
        assert_eq!(err.to_string(), "Configuration error: bad radius");
    }
}
