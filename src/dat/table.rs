//! DAT table model types

/// Position of a cell in the data grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single DAT table held in memory
///
/// Headers and rows are owned `Vec<String>` values, so cloning a `Table`
/// yields a deep copy: snapshots never alias the live store's row storage.
/// Row lengths are not forced to match the header count (see `TableStore`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Ordered column names from the first record of the file
    pub headers: Vec<String>,
    /// Data rows in visual order
    pub rows: Vec<Vec<String>>,
    /// Whether the source file wrapped every field (including empty ones) in quotes
    pub quoted: bool,
    /// Original file name, used for download attachment naming
    pub file_name: String,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns (headers, or the widest row if it is wider)
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.len())
            .fold(self.headers.len(), usize::max)
    }

    /// Get cell value at position, if both indices are in range
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Check if the table holds no headers and no rows
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}
