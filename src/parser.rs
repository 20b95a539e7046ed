// parser.rs

use crate::error::{CalcError, SessionError};
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// Anything that can hand the scanner one line of user input at a time.
pub trait LineSource {
    /// `Ok(None)` means the user closed the input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError>;
}

/// Whitespace-separated tokens pulled lazily from a [`LineSource`].
///
/// Tokens left over on a line are served before the source is asked again,
/// so `3 4` answers both operand prompts at once.
pub struct TokenScanner<S> {
    source: S,
    pending: VecDeque<String>,
}

impl<S: LineSource> TokenScanner<S> {
    pub fn new(source: S) -> Self {
        Self { source, pending: VecDeque::new() }
    }

    pub fn next_token(&mut self, prompt: &str) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            match self.source.read_line(prompt)? {
                Some(line) => self.pending.extend(line.split_whitespace().map(str::to_string)),
                None => return Err(SessionError::EndOfInput),
            }
        }
    }

    pub fn next_operand(&mut self, prompt: &str) -> Result<f64, SessionError> {
        let token = self.next_token(prompt)?;
        Ok(parse_operand(&token)?)
    }

    pub fn next_integer(&mut self, prompt: &str) -> Result<i32, SessionError> {
        let token = self.next_token(prompt)?;
        Ok(parse_integer(&token)?)
    }
}

pub fn parse_operand(token: &str) -> Result<f64, CalcError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InputFormat { token: token.to_string(), expected: "a number" }),
    }
}

pub fn parse_integer(token: &str) -> Result<i32, CalcError> {
    token
        .parse::<i32>()
        .map_err(|_| CalcError::InputFormat { token: token.to_string(), expected: "an integer" })
}
