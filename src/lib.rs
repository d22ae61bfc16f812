//! A single fixed-schema table held in memory, driven one line at a time.
//!
//! Lines starting with `.` are meta-commands (`.exit`). Everything else is a
//! statement: `insert <id> <username> <email>` or `select`. Statements are
//! prepared into a [`Statement`], executed against the paged [`Table`], and
//! rows are stored in the fixed binary layout described in [`layout`].

pub mod error;
pub mod executor;
pub mod layout;
pub mod meta;
pub mod repl;
pub mod row;
pub mod statement;
pub mod table;

pub use error::{Error, ExecuteError, MetaCommandError, PrepareError, Result};
pub use executor::execute;
pub use layout::{
    COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE,
    PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS, USERNAME_OFFSET,
    USERNAME_SIZE,
};
pub use meta::{InputType, MetaCommand};
pub use repl::{Repl, Shutdown};
pub use row::Row;
pub use statement::Statement;
pub use table::{Page, Table};
