//! Sequential interpreter: owns one `OrderedList` and applies commands one
//! at a time, in input order. Each instance is fully independent, so
//! multiple runs (and tests) can coexist in one process.
use thiserror::Error;
use tracing::debug;

use crate::core::list::{EngineError, OrderedList};
use crate::core::parser::{self, ParseError};
use crate::types::{Command, Output};

/// Why a script line was rejected. Both arms are recoverable: the driver
/// reports one diagnostic and moves on to the next line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Default)]
pub struct Interpreter {
    list: OrderedList,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current list state, mainly useful for inspection in tests and
    /// embedding scenarios.
    pub fn list(&self) -> &OrderedList {
        &self.list
    }

    /// Apply one parsed command. Queries yield `Some(Output)`; mutations
    /// yield `None` on success. A failed command leaves the list unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Option<Output>, EngineError> {
        match command {
            Command::Push(letter) => {
                self.list.push(letter);
                Ok(None)
            }
            Command::Remove(letter) => {
                self.list.remove(letter)?;
                Ok(None)
            }
            Command::Head => Ok(Some(Output::Letter(self.list.head()?))),
            Command::Tail => Ok(Some(Output::Letter(self.list.tail()?))),
            Command::Length => Ok(Some(Output::Length(self.list.len()))),
            Command::PrintList => Ok(Some(Output::Listing(self.list.render()))),
        }
    }

    /// Parse and apply one raw script line.
    pub fn run_line(&mut self, line: &str) -> Result<Option<Output>, CommandError> {
        let command = parser::parse_line(line)?;
        debug!(%command, "applying command");
        Ok(self.execute(command)?)
    }
}
