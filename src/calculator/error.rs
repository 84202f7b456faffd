//! Errors produced by calculator operations.

use thiserror::Error;

/// Every way a calculator operation can fail.
///
/// None of these are fatal: the evaluator resets itself to a safe state
/// before returning one, and the caller shows [`CalcError::label`] briefly.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    InvalidResult,
    #[error("argument is outside the function's domain")]
    DomainError,
    #[error("factorial requires a non-negative integer")]
    InvalidInput,
    #[error("factorial argument is too large")]
    Overflow,
    #[error("no history to export")]
    EmptyHistory,
}

impl CalcError {
    /// Short message suitable for the calculator display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by zero",
            Self::EmptyHistory => "No history to export",
            _ => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_has_distinct_label() {
        assert_eq!(CalcError::DivisionByZero.label(), "Cannot divide by zero");
        assert_eq!(CalcError::DomainError.label(), "Error");
        assert_eq!(CalcError::Overflow.label(), "Error");
    }
}
