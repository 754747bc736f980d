//! In-memory table store and its mutation operations
//!
//! Holds the single active table. Mutations are bounds-checked where an
//! index is involved; destructive row deletion goes through an injected
//! confirmation capability so frontends and tests decide the policy.

use super::codec::Decoded;
use super::table::Table;

/// Out-of-range row or column reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    Row { index: usize, len: usize },
    Column { index: usize, len: usize },
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row { index, len } => {
                write!(f, "row index {} out of range (table has {} rows)", index, len)
            }
            Self::Column { index, len } => {
                write!(f, "column index {} out of range (row has {} cells)", index, len)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Outcome of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row was removed
    Deleted,
    /// The confirmation provider declined; rows are unchanged
    Refused,
}

/// Decides whether a row that still contains data may be deleted
///
/// Injected by the caller: the shell passes an interactive prompt, tests
/// pass recording doubles, scripted runs pass [`AutoConfirm`]. Takes
/// `&mut self` so providers can record the calls they receive.
pub trait ConfirmDelete {
    fn confirm(&mut self, row_index: usize, row: &[String]) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: FnMut(usize, &[String]) -> bool,
{
    fn confirm(&mut self, row_index: usize, row: &[String]) -> bool {
        self(row_index, row)
    }
}

/// Confirmation provider that always answers yes
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmDelete for AutoConfirm {
    fn confirm(&mut self, _row_index: usize, _row: &[String]) -> bool {
        true
    }
}

/// The single active table plus an unsaved-changes flag
///
/// Loading replaces all state wholesale; mutations act in place between
/// loads. `snapshot` hands out deep copies, so callers can never mutate
/// the store through a returned table.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    table: Table,
    dirty: bool,
}

impl TableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replace of headers, rows, quoting flag, and file name
    pub fn load(&mut self, decoded: Decoded, file_name: impl Into<String>) {
        self.table = Table {
            headers: decoded.headers,
            rows: decoded.rows,
            quoted: decoded.quoted,
            file_name: file_name.into(),
        };
        self.dirty = false;
    }

    /// Replace the data rows directly, leaving headers and metadata alone
    ///
    /// No shape validation happens here: ragged input is stored as-is.
    pub fn replace_rows(&mut self, rows: Vec<Vec<String>>) {
        self.table.rows = rows;
        self.dirty = true;
    }

    /// Read access to the live table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Deep copy of the current table
    pub fn snapshot(&self) -> Table {
        self.table.clone()
    }

    /// Whether the table has unsaved mutations since the last load/save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the unsaved-changes flag after a successful save
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Replace a single cell, leaving every other cell untouched
    pub fn edit_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), IndexError> {
        let row_count = self.table.rows.len();
        let cells = self
            .table
            .rows
            .get_mut(row)
            .ok_or(IndexError::Row { index: row, len: row_count })?;
        let len = cells.len();
        let cell = cells
            .get_mut(col)
            .ok_or(IndexError::Column { index: col, len })?;

        let value = value.into();
        if *cell != value {
            *cell = value;
            self.dirty = true;
        }
        Ok(())
    }

    /// Insert a blank row and return its resulting 0-based index
    ///
    /// The new row holds one empty string per header (zero cells on a
    /// headerless table). `position` follows the grid's 1-based numbering:
    /// `Some(0)` inserts at the very top, `Some(n)` inserts immediately
    /// after row `n` (clamped to append when `n` exceeds the row count),
    /// and `None` appends. Callers that parse user input map unparseable
    /// positions to `None`.
    pub fn insert_row(&mut self, position: Option<usize>) -> usize {
        let blank = vec![String::new(); self.table.headers.len()];
        let index = match position {
            Some(n) => n.min(self.table.rows.len()),
            None => self.table.rows.len(),
        };

        self.table.rows.insert(index, blank);
        self.dirty = true;
        index
    }

    /// Delete a row, consulting the confirmation provider when it holds data
    ///
    /// A row whose cells are all empty after trimming is removed without
    /// asking. Refusal leaves the rows untouched and is a normal outcome,
    /// not an error.
    pub fn delete_row(
        &mut self,
        row: usize,
        confirm: &mut dyn ConfirmDelete,
    ) -> Result<DeleteOutcome, IndexError> {
        let len = self.table.rows.len();
        let cells = self
            .table
            .rows
            .get(row)
            .ok_or(IndexError::Row { index: row, len })?;

        let all_blank = cells.iter().all(|cell| cell.trim().is_empty());
        if !all_blank && !confirm.confirm(row, cells) {
            return Ok(DeleteOutcome::Refused);
        }

        self.table.rows.remove(row);
        self.dirty = true;
        Ok(DeleteOutcome::Deleted)
    }
}
