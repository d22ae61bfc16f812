//! Parsing of data statements.
//!
//! `insert <id> <username> <email>` and a bare `select` are the whole
//! grammar. Checks run in a fixed order (argument shape, id sign, username
//! length, email length) so a given malformed line always reports the same
//! error.

use std::str::FromStr;

use crate::error::PrepareError;
use crate::layout::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};
use crate::row::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    pub fn prepare(input: &str) -> Result<Statement, PrepareError> {
        let mut tokens = input.split_whitespace();
        match tokens.next() {
            Some("insert") => prepare_insert(tokens),
            Some("select") if tokens.next().is_none() => Ok(Statement::Select),
            _ => Err(PrepareError::UnrecognizedStatement(input.to_string())),
        }
    }
}

impl FromStr for Statement {
    type Err = PrepareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statement::prepare(s)
    }
}

/// Builds an insert from `<id> <username> <email>`.
///
/// Besides the argument count, the shape check rejects a username containing
/// `@` (an address in that position means the arguments were swapped, so
/// `insert 1 a@b a@b` is a syntax error) and any field containing a NUL byte,
/// which the zero-padded row format cannot store.
fn prepare_insert<'a>(args: impl Iterator<Item = &'a str>) -> Result<Statement, PrepareError> {
    let args: Vec<&str> = args.collect();
    let &[id, username, email] = args.as_slice() else {
        return Err(PrepareError::SyntaxError);
    };
    if username.contains('@') || username.contains('\0') || email.contains('\0') {
        return Err(PrepareError::SyntaxError);
    }

    let id = parse_id(id)?;
    if username.len() > COLUMN_USERNAME_SIZE {
        return Err(PrepareError::StringTooLong);
    }
    if email.len() > COLUMN_EMAIL_SIZE {
        return Err(PrepareError::StringTooLong);
    }

    Ok(Statement::Insert(Row::new(id, username, email)))
}

fn parse_id(token: &str) -> Result<u32, PrepareError> {
    if let Some(magnitude) = token.strip_prefix('-') {
        if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
            // "-0" is still zero.
            if magnitude.bytes().any(|b| b != b'0') {
                return Err(PrepareError::NegativeId);
            }
            return Ok(0);
        }
        return Err(PrepareError::SyntaxError);
    }
    token.parse::<u32>().map_err(|_| PrepareError::SyntaxError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(id: u32, username: &str, email: &str) -> Statement {
        Statement::Insert(Row::new(id, username, email))
    }

    #[test]
    fn prepares_insert() {
        assert_eq!(
            Statement::prepare("insert 1 alice alice@example.com"),
            Ok(insert(1, "alice", "alice@example.com"))
        );
        assert_eq!(
            "insert   2\tbob   bob@example.com".parse::<Statement>(),
            Ok(insert(2, "bob", "bob@example.com"))
        );
    }

    #[test]
    fn prepares_select() {
        assert_eq!(Statement::prepare("select"), Ok(Statement::Select));
    }

    #[test]
    fn rejects_unknown_keywords() {
        for line in ["update 1", "", "SELECT", "inserts 1 a b", "select *", "select 1"] {
            assert_eq!(
                Statement::prepare(line),
                Err(PrepareError::UnrecognizedStatement(line.to_string())),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn rejects_wrong_argument_count() {
        for line in ["insert", "insert 1", "insert 1 bob", "insert 1 bob bob@x extra"] {
            assert_eq!(Statement::prepare(line), Err(PrepareError::SyntaxError), "line {line:?}");
        }
    }

    #[test]
    fn rejects_swapped_username_and_email() {
        assert_eq!(
            Statement::prepare("insert -1 bob@x bob"),
            Err(PrepareError::SyntaxError)
        );
    }

    #[test]
    fn rejects_nul_in_text_fields() {
        for line in ["insert 1 a\0b c", "insert 1 bob bob\0@x", "insert -1 \0 bob@x"] {
            assert_eq!(Statement::prepare(line), Err(PrepareError::SyntaxError), "line {line:?}");
        }
    }

    #[test]
    fn rejects_negative_id() {
        assert_eq!(
            Statement::prepare("insert -1 bob bob@x"),
            Err(PrepareError::NegativeId)
        );
        assert_eq!(
            Statement::prepare("insert -99999999999999999999 bob bob@x"),
            Err(PrepareError::NegativeId)
        );
    }

    #[test]
    fn accepts_id_bounds() {
        assert_eq!(Statement::prepare("insert 0 a b"), Ok(insert(0, "a", "b")));
        assert_eq!(Statement::prepare("insert -0 a b"), Ok(insert(0, "a", "b")));
        assert_eq!(
            Statement::prepare("insert 4294967295 a b"),
            Ok(insert(u32::MAX, "a", "b"))
        );
    }

    #[test]
    fn rejects_unparseable_id() {
        for line in ["insert abc a b", "insert 4294967296 a b", "insert - a b", "insert -x a b"] {
            assert_eq!(Statement::prepare(line), Err(PrepareError::SyntaxError), "line {line:?}");
        }
    }

    #[test]
    fn rejects_long_strings() {
        let name = "a".repeat(COLUMN_USERNAME_SIZE + 1);
        assert_eq!(
            Statement::prepare(&format!("insert 1 {name} bob@x")),
            Err(PrepareError::StringTooLong)
        );

        let email = "e".repeat(COLUMN_EMAIL_SIZE + 1);
        assert_eq!(
            Statement::prepare(&format!("insert 1 bob {email}")),
            Err(PrepareError::StringTooLong)
        );
    }

    #[test]
    fn accepts_maximum_lengths() {
        let name = "a".repeat(COLUMN_USERNAME_SIZE);
        let email = "e".repeat(COLUMN_EMAIL_SIZE);
        assert_eq!(
            Statement::prepare(&format!("insert 1 {name} {email}")),
            Ok(insert(1, &name, &email))
        );
    }

    #[test]
    fn negative_id_is_reported_before_long_strings() {
        let name = "a".repeat(COLUMN_USERNAME_SIZE + 1);
        assert_eq!(
            Statement::prepare(&format!("insert -5 {name} bob@x")),
            Err(PrepareError::NegativeId)
        );
    }

    #[test]
    fn length_is_measured_in_bytes() {
        // 11 three-byte characters
        let name = "\u{20AC}".repeat(11);
        assert_eq!(
            Statement::prepare(&format!("insert 1 {name} bob@x")),
            Err(PrepareError::StringTooLong)
        );
    }
}
