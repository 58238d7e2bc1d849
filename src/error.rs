//! Error types for calculator operations

use thiserror::Error;

use crate::types::Side;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalculatorError>;

/// Errors surfaced to callers of the calculator
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("{} lineup must have exactly 9 players. Current: {}", .side.title(), .len)]
    InvalidLineup { side: Side, len: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No active game")]
    NoActiveGame,

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalculatorError {
    /// Errors caused by the request rather than by storage
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            CalculatorError::InvalidLineup { .. }
                | CalculatorError::Validation(_)
                | CalculatorError::NoActiveGame
                | CalculatorError::GameNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_lineup_message() {
        let err = CalculatorError::InvalidLineup {
            side: Side::Home,
            len: 8,
        };
        assert_eq!(
            err.to_string(),
            "Home lineup must have exactly 9 players. Current: 8"
        );
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_io_is_not_caller_error() {
        let err = CalculatorError::from(std::io::Error::other("disk"));
        assert!(!err.is_caller_error());
    }
}
