//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use datgrid::dat::ConfirmDelete;
use datgrid::TableService;

/// Unquoted sample file content
pub fn sample_dat() -> &'static [u8] {
    b"id|name|city\n1|Alice|Lisbon\n2|Bob|Berlin\n3|Carol|Oslo\n"
}

/// Fully quoted sample file content
pub fn quoted_dat() -> &'static [u8] {
    b"\"id\"|\"name\"|\"city\"\n\"1\"|\"Alice\"|\"Lisbon\"\n\"2\"|\"Bob\"|\"Berlin\"\n"
}

/// Service preloaded with `sample_dat`
pub fn loaded_service() -> TableService {
    let service = TableService::new();
    service.upload("sample.dat", sample_dat()).unwrap();
    service
}

/// Confirmation double that records every call and returns a fixed answer
pub struct RecordingConfirm {
    pub calls: Vec<(usize, Vec<String>)>,
    pub answer: bool,
}

impl RecordingConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            calls: Vec::new(),
            answer,
        }
    }
}

impl ConfirmDelete for RecordingConfirm {
    fn confirm(&mut self, row_index: usize, row: &[String]) -> bool {
        self.calls.push((row_index, row.to_vec()));
        self.answer
    }
}
