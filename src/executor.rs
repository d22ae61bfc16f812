//! Runs prepared statements against the table.

use std::io::Write;

use crate::error::ExecuteError;
use crate::statement::Statement;
use crate::table::Table;

/// Applies `statement` to `table`; `select` writes one line per row to `out`.
pub fn execute<W: Write>(
    statement: Statement,
    table: &mut Table,
    out: &mut W,
) -> Result<(), ExecuteError> {
    match statement {
        Statement::Insert(row) => table.insert(&row),
        Statement::Select => execute_select(table, out),
    }
}

fn execute_select<W: Write>(table: &Table, out: &mut W) -> Result<(), ExecuteError> {
    for row in table.rows() {
        writeln!(out, "{row}")?;
    }
    Ok(())
}
