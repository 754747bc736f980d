//! DAT parsing and writing using the csv crate
//!
//! DAT files are pipe-delimited text files, optionally with every field
//! wrapped in double quotes. Decoding detects which convention the source
//! file uses; encoding reproduces it, so a file round-trips through an
//! edit session in its original dialect.

use std::io::Cursor;

use super::table::Table;

/// Field delimiter for DAT files
pub const DELIMITER: u8 = b'|';

/// Error type for DAT parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "DAT parse error at line {}: {}", line, self.message),
            None => write!(f, "DAT parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Decoded contents of a DAT file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// First parsed record
    pub headers: Vec<String>,
    /// All records after the first
    pub rows: Vec<Vec<String>>,
    /// Whether every field of the first line was double-quoted
    pub quoted: bool,
}

/// Detect the quoting convention from the raw first line
///
/// Returns true iff every `|`-separated field of the first line, after
/// trimming surrounding whitespace, both starts and ends with `"`.
/// Later lines are never inspected; this is a one-shot heuristic taken
/// before any blank-line skipping.
pub fn detect_quoting(bytes: &[u8]) -> bool {
    let first_line = match bytes.iter().position(|&b| b == b'\n') {
        Some(end) => &bytes[..end],
        None => bytes,
    };
    let first_line = String::from_utf8_lossy(first_line);

    first_line.split('|').all(|field| {
        let trimmed = field.trim();
        trimmed.starts_with('"') && trimmed.ends_with('"')
    })
}

/// Decode DAT bytes into headers, data rows, and the quoting flag
///
/// Parses with delimiter `|` and quote `"`, dropping whitespace around
/// delimiters and skipping blank lines; padding inside quoted fields is
/// kept. The first record becomes the headers; everything after it
/// becomes data rows. Row lengths are not validated against the header
/// count. Fails on invalid UTF-8 and on a quote left open at end of
/// input.
pub fn decode(bytes: &[u8]) -> Result<Decoded, ParseError> {
    let quoted = detect_quoting(bytes);
    let cleaned = sanitize(bytes)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quote(b'"')
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(cleaned));

    let mut records = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                records.push(row);
            }
            Err(e) => {
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(line_num + 1),
                });
            }
        }
    }

    let mut records = records.into_iter();
    let headers = records.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = records.collect();

    Ok(Decoded {
        headers,
        rows,
        quoted,
    })
}

/// Strip whitespace around delimiters and line breaks so a field-leading
/// quote sits flush against the delimiter; bytes inside quoted fields are
/// copied verbatim. Fails when a quote opened at the start of a field is
/// never closed, reporting the line it was opened on.
fn sanitize(bytes: &[u8]) -> Result<Vec<u8>, ParseError> {
    let mut out = Vec::with_capacity(bytes.len());
    // Whitespace run that only survives if more field content follows it
    let mut pending = Vec::new();
    let mut in_quotes = false;
    let mut field_started = false;
    let mut line = 1;
    let mut opened_at = 1;

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    out.extend_from_slice(b"\"\"");
                    i += 2;
                    continue;
                }
                in_quotes = false;
            } else if b == b'\n' {
                line += 1;
            }
            out.push(b);
        } else {
            match b {
                b' ' | b'\t' => {
                    if field_started {
                        pending.push(b);
                    }
                }
                b'|' => {
                    pending.clear();
                    out.push(b);
                    field_started = false;
                }
                b'\n' => {
                    pending.clear();
                    out.push(b);
                    field_started = false;
                    line += 1;
                }
                b'\r' => {
                    pending.clear();
                    out.push(b);
                    field_started = false;
                    if bytes.get(i + 1) != Some(&b'\n') {
                        line += 1;
                    }
                }
                // A quote only opens a quoted field at the start of a field
                b'"' if !field_started => {
                    in_quotes = true;
                    opened_at = line;
                    field_started = true;
                    out.push(b);
                }
                _ => {
                    out.append(&mut pending);
                    out.push(b);
                    field_started = true;
                }
            }
        }
        i += 1;
    }

    if in_quotes {
        return Err(ParseError {
            message: "unterminated quote".to_string(),
            line: Some(opened_at),
        });
    }
    Ok(out)
}

/// Encode a table back into DAT bytes, preserving its quoting convention
///
/// With `quoted = true` every field is wrapped in `"`, including empty
/// fields (which serialize as `""`), and embedded quotes are doubled.
/// With `quoted = false` a field is quoted only when it contains the
/// delimiter, a quote, or a line break. A table with no headers and no
/// rows encodes to zero bytes.
pub fn encode(table: &Table) -> Vec<u8> {
    if table.headers.is_empty() && table.rows.is_empty() {
        return Vec::new();
    }

    match write_table(table) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to encode DAT table: {}", e);
            Vec::new()
        }
    }
}

fn write_table(table: &Table) -> csv::Result<Vec<u8>> {
    let quote_style = if table.quoted {
        csv::QuoteStyle::Always
    } else {
        csv::QuoteStyle::Necessary
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote(b'"')
        .quote_style(quote_style)
        .flexible(true)
        .from_writer(Vec::new());

    if !table.headers.is_empty() {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}
