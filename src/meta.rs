//! Meta-commands and classification of input lines.

use crate::error::MetaCommandError;

pub const META_COMMAND_PREFIX: char = '.';

// Non-SQL statements like .exit are called “meta-commands”.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
}

impl MetaCommand {
    /// Recognizes a line that starts with [`META_COMMAND_PREFIX`].
    pub fn dispatch(input: &str) -> Result<MetaCommand, MetaCommandError> {
        match input {
            ".exit" => Ok(MetaCommand::Exit),
            _ => Err(MetaCommandError::Unrecognized(input.to_string())),
        }
    }
}

/// Which pipeline a line belongs to. A line is never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType<'a> {
    Meta(&'a str),
    Statement(&'a str),
}

impl<'a> InputType<'a> {
    pub fn parse(input: &'a str) -> InputType<'a> {
        if input.starts_with(META_COMMAND_PREFIX) {
            InputType::Meta(input)
        } else {
            InputType::Statement(input)
        }
    }
}
