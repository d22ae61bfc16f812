//! The table's only record type and its fixed-width binary form.

use std::fmt;

use crate::layout::{Column, EMAIL_COLUMN, ID_COLUMN, ROW_SIZE, USERNAME_COLUMN};

/// One `(id, username, email)` record.
///
/// Text lengths are checked by the preparer, not here. Serializing a row
/// whose text is wider than its column panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Writes the row into the first `ROW_SIZE` bytes of `destination`.
    pub fn serialize(&self, destination: &mut [u8]) {
        let destination = &mut destination[..ROW_SIZE];
        destination[ID_COLUMN.range()].copy_from_slice(&self.id.to_le_bytes());
        write_text(destination, &USERNAME_COLUMN, &self.username);
        write_text(destination, &EMAIL_COLUMN, &self.email);
    }

    /// Reads a row back from the first `ROW_SIZE` bytes of `source`.
    pub fn deserialize(source: &[u8]) -> Self {
        let source = &source[..ROW_SIZE];
        let mut id = [0u8; ID_COLUMN.width];
        id.copy_from_slice(&source[ID_COLUMN.range()]);
        Self {
            id: u32::from_le_bytes(id),
            username: read_text(source, &USERNAME_COLUMN),
            email: read_text(source, &EMAIL_COLUMN),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

// Zero-padded to the column width; a value that fills the column has no terminator.
fn write_text(row: &mut [u8], column: &Column, value: &str) {
    let field = &mut row[column.range()];
    let bytes = value.as_bytes();
    field[..bytes.len()].copy_from_slice(bytes);
    field[bytes.len()..].fill(0);
}

fn read_text(row: &[u8], column: &Column) -> String {
    let field = &row[column.range()];
    let len = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..len]).into_owned()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::layout::{EMAIL_OFFSET, EMAIL_SIZE, USERNAME_OFFSET, USERNAME_SIZE};

    fn round_trip(row: &Row) -> Row {
        let mut buffer = [0u8; ROW_SIZE];
        row.serialize(&mut buffer);
        Row::deserialize(&buffer)
    }

    #[test]
    fn fields_land_at_fixed_offsets() {
        let row = Row::new(0x0102_0304, "alice", "alice@example.com");
        let mut buffer = [0xAAu8; ROW_SIZE];
        row.serialize(&mut buffer);

        assert_eq!(&buffer[..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buffer[USERNAME_OFFSET..USERNAME_OFFSET + 5], b"alice");
        assert!(buffer[USERNAME_OFFSET + 5..EMAIL_OFFSET].iter().all(|&b| b == 0));
        assert_eq!(&buffer[EMAIL_OFFSET..EMAIL_OFFSET + 17], b"alice@example.com");
        assert!(buffer[EMAIL_OFFSET + 17..].iter().all(|&b| b == 0));
    }

    #[test]
    fn full_width_text_round_trips() {
        let row = Row::new(u32::MAX, "u".repeat(USERNAME_SIZE), "e".repeat(EMAIL_SIZE));
        assert_eq!(round_trip(&row), row);
    }

    #[test]
    fn serialize_uses_only_row_size_bytes_of_a_larger_buffer() {
        let row = Row::new(7, "bob", "bob@example.com");
        let mut buffer = vec![0xFFu8; ROW_SIZE + 16];
        row.serialize(&mut buffer);

        assert!(buffer[ROW_SIZE..].iter().all(|&b| b == 0xFF));
        assert_eq!(Row::deserialize(&buffer), row);
    }

    #[test]
    #[should_panic]
    fn serialize_into_short_buffer_panics() {
        let mut buffer = [0u8; ROW_SIZE - 1];
        Row::new(1, "a", "b").serialize(&mut buffer);
    }

    #[test]
    fn display_matches_select_output() {
        let row = Row::new(1, "alice", "alice@example.com");
        assert_eq!(row.to_string(), "(1, alice, alice@example.com)");
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(
            id in any::<u32>(),
            username in "[a-zA-Z0-9_.@-]{0,32}",
            email in "[a-zA-Z0-9_.@-]{0,255}",
        ) {
            let row = Row::new(id, username, email);
            prop_assert_eq!(round_trip(&row), row);
        }
    }
}
