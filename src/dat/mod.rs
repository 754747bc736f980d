//! DAT file model: codec, table store, and search
//!
//! A DAT file is a pipe-delimited flat file in one of two quoting
//! dialects, detected per file and reproduced on save:
//! - every field wrapped in double quotes (`"a"|"b"`)
//! - no quoting at all (`a|b`)
//!
//! # Architecture
//!
//! ```text
//! bytes ──decode──▶ Decoded ──load──▶ TableStore
//!                                         │ edit_cell / insert_row / delete_row
//!                                         ▼
//!                                      Table ──encode──▶ bytes
//! ```
//!
//! The store is plain single-threaded state; [`crate::service::TableService`]
//! wraps it for shared access.

mod codec;
mod search;
mod store;
mod table;

pub use codec::{decode, detect_quoting, encode, Decoded, ParseError, DELIMITER};
pub use search::{find_matches, Matches};
pub use store::{AutoConfirm, ConfirmDelete, DeleteOutcome, IndexError, TableStore};
pub use table::{CellPosition, Table};
