//! Library error types

use thiserror::Error;

/// Errors produced when validating reflow options
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Line width of zero
    #[error("line width must be greater than zero")]
    InvalidLineWidth,

    /// Paragraph group size of zero
    #[error("sentences per paragraph must be greater than zero")]
    InvalidGroupSize,
}

/// Result type for reflow operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_flat_and_descriptive() {
        assert_eq!(
            CoreError::InvalidLineWidth.to_string(),
            "line width must be greater than zero"
        );
        assert_eq!(
            CoreError::InvalidGroupSize.to_string(),
            "sentences per paragraph must be greater than zero"
        );
    }
}
