//! The read-prepare-execute loop.
//!
//! Owns the table for the lifetime of a session. `.exit` and end of input both
//! release every page before `run` returns; only the reason differs.

use std::io::{BufRead, Write};

use tracing::{debug, trace, warn};

use crate::error::{Error, PrepareError, Result};
use crate::executor::execute;
use crate::meta::{InputType, MetaCommand};
use crate::statement::Statement;
use crate::table::Table;

pub const PROMPT: &str = "db > ";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// `.exit` was entered.
    Exit,
    /// The input closed or could not be read.
    EndOfInput,
}

impl Shutdown {
    pub fn is_success(self) -> bool {
        matches!(self, Shutdown::Exit)
    }
}

enum Control {
    Continue,
    Exit,
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    table: Table,
    prompt: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            table: Table::new(),
            prompt: true,
        }
    }

    /// Enables or disables the `db > ` prompt.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Processes lines until `.exit` or end of input.
    ///
    /// Statement and meta-command failures are printed and the loop goes on.
    /// Only a failure to write output is returned as an error.
    pub fn run(mut self) -> Result<Shutdown> {
        let mut buffer = Vec::new();
        loop {
            self.print_prompt()?;
            if !self.read_input(&mut buffer) {
                writeln!(self.output, "Error reading input")?;
                return self.shutdown(Shutdown::EndOfInput);
            }

            let raw = strip_line_ending(&buffer);
            let line = String::from_utf8_lossy(raw);
            trace!(line = %line, "read line");
            let result = match std::str::from_utf8(raw) {
                Ok(text) => self.process_line(text),
                Err(_) => self.process_undecodable_line(&line),
            };
            match result {
                Ok(Control::Continue) => {}
                Ok(Control::Exit) => return self.shutdown(Shutdown::Exit),
                Err(err) if err.is_recoverable() => {
                    debug!(line = %line, error = ?err, "command rejected");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn process_line(&mut self, line: &str) -> Result<Control> {
        match InputType::parse(line) {
            InputType::Meta(command) => match MetaCommand::dispatch(command)? {
                MetaCommand::Exit => Ok(Control::Exit),
            },
            InputType::Statement(text) => {
                let statement = Statement::prepare(text)?;
                debug!(?statement, "prepared statement");
                execute(statement, &mut self.table, &mut self.output)?;
                writeln!(self.output, "Executed.")?;
                Ok(Control::Continue)
            }
        }
    }

    /// A line that is not valid UTF-8 can only be reported, never stored.
    fn process_undecodable_line(&mut self, line: &str) -> Result<Control> {
        match InputType::parse(line) {
            InputType::Meta(command) => match MetaCommand::dispatch(command)? {
                MetaCommand::Exit => Ok(Control::Exit),
            },
            InputType::Statement(_) => Err(PrepareError::SyntaxError.into()),
        }
    }

    fn print_prompt(&mut self) -> Result<()> {
        if self.prompt {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Reads the next line into `buffer`; `false` when no line could be read.
    fn read_input(&mut self, buffer: &mut Vec<u8>) -> bool {
        buffer.clear();
        match self.input.read_until(b'\n', buffer) {
            Ok(0) => false,
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "failed to read input");
                false
            }
        }
    }

    fn shutdown(mut self, reason: Shutdown) -> Result<Shutdown> {
        self.output.flush().map_err(Error::from)?;
        let rows = self.table.num_rows();
        let pages = self.table.close();
        debug!(?reason, rows, pages, "released table");
        Ok(reason)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
