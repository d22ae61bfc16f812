//! Paged, append-only row store.
//!
//! Rows are packed `ROWS_PER_PAGE` to a page and never straddle a page
//! boundary. Pages are allocated the first time a row index maps into them
//! and are all released together when the table is closed or dropped.

use crate::error::ExecuteError;
use crate::layout::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS};
use crate::row::Row;

/// A zeroed `PAGE_SIZE` buffer on the heap.
pub struct Page {
    data: Box<[u8]>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            data: vec![0u8; PAGE_SIZE].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Table {
    num_rows: usize,
    pages: Vec<Option<Page>>,
}

/// Page index and byte offset within that page of a row.
fn locate(row_num: usize) -> (usize, usize) {
    let page_num = row_num / ROWS_PER_PAGE;
    let byte_offset = (row_num % ROWS_PER_PAGE) * ROW_SIZE;
    (page_num, byte_offset)
}

impl Table {
    pub fn new() -> Self {
        Self {
            num_rows: 0,
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    /// Number of pages touched so far.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Mutable bytes for `row_num`, allocating its page on first touch.
    ///
    /// Panics if `row_num` maps past the last page.
    pub fn row_slot(&mut self, row_num: usize) -> &mut [u8] {
        let (page_num, byte_offset) = locate(row_num);
        let page = self.pages[page_num].get_or_insert_with(Page::new);
        &mut page.as_mut_slice()[byte_offset..byte_offset + ROW_SIZE]
    }

    /// Read-only bytes for `row_num`, or `None` if its page was never allocated.
    pub fn slot(&self, row_num: usize) -> Option<&[u8]> {
        let (page_num, byte_offset) = locate(row_num);
        self.pages
            .get(page_num)?
            .as_ref()
            .map(|page| &page.as_slice()[byte_offset..byte_offset + ROW_SIZE])
    }

    /// Appends a row after the last one.
    pub fn insert(&mut self, row: &Row) -> Result<(), ExecuteError> {
        if self.is_full() {
            return Err(ExecuteError::TableFull);
        }
        let row_num = self.num_rows;
        row.serialize(self.row_slot(row_num));
        self.num_rows += 1;
        Ok(())
    }

    /// Stored rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.num_rows)
            .filter_map(|row_num| self.slot(row_num))
            .map(Row::deserialize)
    }

    /// Releases every allocated page and returns how many there were.
    pub fn close(self) -> usize {
        self.allocated_pages()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
