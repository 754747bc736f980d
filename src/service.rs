//! Shared table service and wire-format types
//!
//! [`TableService`] wraps the single [`TableStore`] behind a mutex so any
//! frontend (shell today, an embedding application tomorrow) can share one
//! instance across threads. Operations take `&self` and serialize on the
//! lock; the last writer wins.
//!
//! The wire types mirror what a JSON frontend exchanges with the service:
//! camelCase keys, data rows separated from headers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::dat::{
    self, ConfirmDelete, Decoded, DeleteOutcome, IndexError, ParseError, Table, TableStore,
};

/// Row/column counts reported after a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSummary {
    pub rows: usize,
    pub columns: usize,
}

/// Encoded file bytes plus the metadata a download response needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Download {
    /// `Content-Disposition` header value for serving the file as an
    /// attachment
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

/// Full table state as exchanged with a JSON frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    pub data_rows: Vec<Vec<String>>,
    pub file_name: String,
    pub quoted: bool,
}

/// Wholesale data-row replacement sent by a frontend after local edits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub data_rows: Vec<Vec<String>>,
}

/// Thread-safe owner of the active table
#[derive(Debug, Default)]
pub struct TableService {
    store: Mutex<TableStore>,
}

impl TableService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recover the store even if a previous holder panicked mid-operation;
    /// every mutation leaves the table in a consistent state
    fn lock(&self) -> MutexGuard<'_, TableStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parse `bytes` and replace the active table on success
    ///
    /// Parsing happens before the lock is taken, so a failed upload leaves
    /// the previously loaded table untouched.
    pub fn upload(
        &self,
        file_name: impl Into<String>,
        bytes: &[u8],
    ) -> Result<UploadSummary, ParseError> {
        let decoded = dat::decode(bytes)?;
        let file_name = file_name.into();
        let summary = UploadSummary {
            rows: decoded.rows.len(),
            columns: decoded.headers.len(),
        };
        tracing::info!(
            "Loaded {} with {} data rows x {} columns (quoted: {})",
            file_name,
            summary.rows,
            summary.columns,
            decoded.quoted
        );
        self.lock().load(decoded, file_name);
        Ok(summary)
    }

    /// Replace all data rows with the frontend's edited copy
    pub fn apply_update(&self, update: UpdateRequest) {
        self.replace_rows(update.data_rows);
    }

    /// Replace all data rows, keeping headers and quoting untouched
    pub fn replace_rows(&self, rows: Vec<Vec<String>>) {
        tracing::debug!("Replacing table data with {} rows", rows.len());
        self.lock().replace_rows(rows);
    }

    /// Deep copy of the current table
    pub fn snapshot(&self) -> Table {
        self.lock().snapshot()
    }

    /// Current table state in wire shape
    pub fn snapshot_wire(&self) -> TableSnapshot {
        let table = self.snapshot();
        TableSnapshot {
            headers: table.headers,
            data_rows: table.rows,
            file_name: table.file_name,
            quoted: table.quoted,
        }
    }

    /// Encode the current table for download under its stored file name
    pub fn download(&self) -> Download {
        let table = self.snapshot();
        Download {
            body: dat::encode(&table),
            file_name: table.file_name,
            content_type: "text/plain",
        }
    }

    pub fn edit_cell(
        &self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), IndexError> {
        self.lock().edit_cell(row, col, value)
    }

    pub fn insert_row(&self, position: Option<usize>) -> usize {
        self.lock().insert_row(position)
    }

    /// Delete a row; the confirmation provider runs while the lock is held,
    /// so the row it is shown cannot change under it
    pub fn delete_row(
        &self,
        row: usize,
        confirm: &mut dyn ConfirmDelete,
    ) -> Result<DeleteOutcome, IndexError> {
        self.lock().delete_row(row, confirm)
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().is_dirty()
    }

    pub fn mark_saved(&self) {
        self.lock().mark_saved()
    }

    /// Load pre-parsed table data, replacing the active table
    pub fn load(&self, decoded: Decoded, file_name: impl Into<String>) {
        self.lock().load(decoded, file_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dat::AutoConfirm;

    fn loaded_service() -> TableService {
        let service = TableService::new();
        service
            .upload("people.dat", b"name|city\nAlice|Lisbon\nBob|Berlin\n")
            .unwrap();
        service
    }

    #[test]
    fn test_upload_reports_shape() {
        let service = TableService::new();

        let summary = service
            .upload("people.dat", b"name|city\nAlice|Lisbon\n")
            .unwrap();

        assert_eq!(summary, UploadSummary { rows: 1, columns: 2 });
    }

    #[test]
    fn test_upload_failure_keeps_previous_table() {
        let service = loaded_service();

        let result = service.upload("broken.dat", b"ok|\xff\xfe\n");

        assert!(result.is_err());
        let table = service.snapshot();
        assert_eq!(table.file_name, "people.dat");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_snapshot_wire_uses_camel_case_keys() {
        let service = loaded_service();

        let json = serde_json::to_value(service.snapshot_wire()).unwrap();

        assert_eq!(json["fileName"], "people.dat");
        assert_eq!(json["quoted"], false);
        assert_eq!(json["dataRows"][0][0], "Alice");
        assert_eq!(json["headers"][1], "city");
    }

    #[test]
    fn test_apply_update_accepts_camel_case_payload() {
        let service = loaded_service();
        let update: UpdateRequest =
            serde_json::from_str(r#"{"dataRows":[["Carol","Oslo"]]}"#).unwrap();

        service.apply_update(update);

        let table = service.snapshot();
        assert_eq!(table.rows, vec![vec!["Carol".to_string(), "Oslo".to_string()]]);
        assert_eq!(table.headers, vec!["name".to_string(), "city".to_string()]);
        assert!(service.is_dirty());
    }

    #[test]
    fn test_update_keeps_ragged_rows_as_sent() {
        let service = loaded_service();

        service.replace_rows(vec![vec!["lonely".to_string()]]);

        assert_eq!(service.snapshot().rows, vec![vec!["lonely".to_string()]]);
    }

    #[test]
    fn test_download_round_trips_content() {
        let service = loaded_service();

        let download = service.download();

        assert_eq!(download.file_name, "people.dat");
        assert_eq!(download.content_type, "text/plain");
        assert_eq!(
            download.content_disposition(),
            "attachment; filename=\"people.dat\""
        );
        assert_eq!(download.body, b"name|city\nAlice|Lisbon\nBob|Berlin\n");
    }

    #[test]
    fn test_download_empty_store() {
        let service = TableService::new();

        let download = service.download();

        assert!(download.body.is_empty());
        assert!(download.file_name.is_empty());
    }

    #[test]
    fn test_mutations_pass_through() {
        let service = loaded_service();

        service.edit_cell(0, 1, "Porto").unwrap();
        let inserted = service.insert_row(Some(0));
        let outcome = service.delete_row(2, &mut AutoConfirm).unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(outcome, DeleteOutcome::Deleted);
        let table = service.snapshot();
        assert_eq!(table.get(1, 1), Some("Porto"));
        assert_eq!(table.row_count(), 2);
        assert!(service.is_dirty());
        service.mark_saved();
        assert!(!service.is_dirty());
    }
}
