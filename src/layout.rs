//! Fixed row layout and store geometry.
//!
//! The row schema is declared once as a list of [`Column`]s. Every offset is
//! derived from the end of the previous column, and both the encoder and the
//! decoder read offsets from here.

use std::ops::Range;

pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;

/// A fixed-width field inside a serialized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Column {
    const fn after(previous: &Column, name: &'static str, width: usize) -> Column {
        Column {
            name,
            offset: previous.end(),
            width,
        }
    }

    /// First byte past this column.
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

pub const ID_COLUMN: Column = Column {
    name: "id",
    offset: 0,
    width: size_of::<u32>(),
};
pub const USERNAME_COLUMN: Column = Column::after(&ID_COLUMN, "username", COLUMN_USERNAME_SIZE);
pub const EMAIL_COLUMN: Column = Column::after(&USERNAME_COLUMN, "email", COLUMN_EMAIL_SIZE);

pub const ROW_LAYOUT: [Column; 3] = [ID_COLUMN, USERNAME_COLUMN, EMAIL_COLUMN];

pub const ID_SIZE: usize = ID_COLUMN.width;
pub const USERNAME_SIZE: usize = USERNAME_COLUMN.width;
pub const EMAIL_SIZE: usize = EMAIL_COLUMN.width;

pub const ID_OFFSET: usize = ID_COLUMN.offset;
pub const USERNAME_OFFSET: usize = USERNAME_COLUMN.offset;
pub const EMAIL_OFFSET: usize = EMAIL_COLUMN.offset;
pub const ROW_SIZE: usize = EMAIL_COLUMN.end();

pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;
