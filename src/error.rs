// error.rs

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failures the calculator recovers from without leaving the session.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("invalid input '{token}', expected {expected}")]
    InputFormat { token: String, expected: &'static str },
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of negative number {0}")]
    NegativeRadicand(f64),
    #[error("invalid option {0}")]
    InvalidSelection(i32),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("end of input")]
    EndOfInput,
    #[error("terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
