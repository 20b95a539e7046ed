// session.rs

use crate::error::SessionError;
use crate::history::History;
use crate::menu::{render_menu, Selection};
use crate::operation::{Operation, OperationKind};
use crate::parser::{LineSource, TokenScanner};
use crate::util::writeln_ignore_broken_pipe;
use std::io::Write;
use tracing::{debug, info};

const SELECTION_PROMPT: &str = "Option: ";
const FAREWELL: &str = "Goodbye!";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    AwaitingSelection,
    AwaitingOperands(OperationKind),
    Terminated,
}

/// One run of the calculator: owns the input scanner, the output sink and
/// the history of computed operations.
pub struct Session<S, W> {
    scanner: TokenScanner<S>,
    out: W,
    history: History,
    state: SessionState,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self {
            scanner: TokenScanner::new(source),
            out,
            history: History::new(),
            state: SessionState::AwaitingSelection,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Drives the loop until the user exits or input ends. Only terminal
    /// I/O failures are returned; calculator errors are reported and skipped.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while self.state() != SessionState::Terminated {
            if let Err(err) = self.step() {
                self.recover(err)?;
            }
        }
        self.say(FAREWELL)
    }

    pub fn step(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::AwaitingSelection => {
                self.say(render_menu())?;
                let number = self.scanner.next_integer(SELECTION_PROMPT)?;
                let selection = Selection::from_number(number)?;
                debug!(?selection, "menu selection");
                match selection {
                    Selection::Compute(kind) => self.state = SessionState::AwaitingOperands(kind),
                    Selection::ViewHistory => self.show_history()?,
                    Selection::Exit => self.state = SessionState::Terminated,
                }
            }
            SessionState::AwaitingOperands(kind) => {
                // any failure below lands back at the menu
                self.state = SessionState::AwaitingSelection;
                let operation = self.read_operation(kind)?;
                let description = operation.describe()?;
                info!(%description, entries = self.history.len() + 1, "operation recorded");
                self.history.add(description.clone());
                self.say(description)?;
            }
            SessionState::Terminated => {}
        }
        Ok(())
    }

    fn read_operation(&mut self, kind: OperationKind) -> Result<Operation, SessionError> {
        let operation = match kind {
            OperationKind::Add => self.read_pair().map(|(a, b)| Operation::Add(a, b))?,
            OperationKind::Subtract => self.read_pair().map(|(a, b)| Operation::Subtract(a, b))?,
            OperationKind::Multiply => self.read_pair().map(|(a, b)| Operation::Multiply(a, b))?,
            OperationKind::Divide => self.read_pair().map(|(a, b)| Operation::Divide(a, b))?,
            OperationKind::Power => {
                let base = self.scanner.next_operand("Enter the base: ")?;
                let exponent = self.scanner.next_integer("Enter the exponent: ")?;
                Operation::Power { base, exponent }
            }
            OperationKind::SquareRoot => {
                Operation::SquareRoot(self.scanner.next_operand("Enter the number: ")?)
            }
        };
        debug!(?operation, "operands read");
        Ok(operation)
    }

    fn read_pair(&mut self) -> Result<(f64, f64), SessionError> {
        let a = self.scanner.next_operand("Enter the first number: ")?;
        let b = self.scanner.next_operand("Enter the second number: ")?;
        Ok((a, b))
    }

    fn show_history(&mut self) -> Result<(), SessionError> {
        self.say("\nOperation history:")?;
        if self.history.is_empty() {
            return self.say("(no operations yet)");
        }
        for entry in self.history.all() {
            writeln_ignore_broken_pipe(&mut self.out, entry)?;
        }
        Ok(())
    }

    fn recover(&mut self, err: SessionError) -> Result<(), SessionError> {
        match err {
            SessionError::Calc(err) => {
                debug!(%err, "recovered");
                self.state = SessionState::AwaitingSelection;
                self.say(format!("Error: {}", err))
            }
            SessionError::EndOfInput => {
                info!("input closed");
                self.state = SessionState::Terminated;
                Ok(())
            }
            other => Err(other),
        }
    }

    fn say<M: AsRef<str>>(&mut self, message: M) -> Result<(), SessionError> {
        writeln_ignore_broken_pipe(&mut self.out, message)?;
        Ok(())
    }
}
