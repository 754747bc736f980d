//! DAT codec round-trip tests
//!
//! Each file's quoting dialect must be detected on load and reproduced
//! byte-for-byte on save, modulo trailing-newline normalization.

use datgrid::dat::{decode, detect_quoting, encode, Table};

mod common;

fn table_from(bytes: &[u8], file_name: &str) -> Table {
    let decoded = decode(bytes).unwrap();
    Table {
        headers: decoded.headers,
        rows: decoded.rows,
        quoted: decoded.quoted,
        file_name: file_name.to_string(),
    }
}

// ========================================================================
// Quoted Dialect
// ========================================================================

#[test]
fn test_quoted_file_round_trip() {
    let input = b"\"a\"|\"b\"\n\"1\"|\"2\"\n";

    let decoded = decode(input).unwrap();
    assert_eq!(decoded.headers, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(decoded.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    assert!(decoded.quoted);

    let table = table_from(input, "t.dat");
    assert_eq!(encode(&table), input);
}

#[test]
fn test_quoted_empty_fields_stay_quoted() {
    let input = b"\"id\"|\"note\"\n\"1\"|\"\"\n";

    let table = table_from(input, "t.dat");

    assert_eq!(table.rows[0][1], "");
    assert_eq!(encode(&table), input);
}

#[test]
fn test_quoted_field_with_embedded_delimiter() {
    let input = b"\"name\"|\"desc\"\n\"x\"|\"a|b\"\n";

    let table = table_from(input, "t.dat");

    assert_eq!(table.rows[0][1], "a|b");
    assert_eq!(encode(&table), input);
}

#[test]
fn test_quoted_field_with_embedded_quote() {
    let input = b"\"h\"\n\"say \"\"hi\"\"\"\n";

    let table = table_from(input, "t.dat");

    assert_eq!(table.rows[0][0], "say \"hi\"");
    assert_eq!(encode(&table), input);
}

#[test]
fn test_padding_inside_quotes_survives_round_trip() {
    let input = b"\"id\"|\"note\"\n\"1\"|\"  keep  \"\n";

    let table = table_from(input, "t.dat");

    assert_eq!(table.rows[0][1], "  keep  ");
    assert_eq!(encode(&table), input);
}

#[test]
fn test_space_padded_quoted_file_normalizes() {
    let input = b" \"a\" | \"b\" \n \"1\" | \"2\" \n";

    let decoded = decode(input).unwrap();
    assert!(decoded.quoted);
    assert_eq!(decoded.headers, vec!["a".to_string(), "b".to_string()]);

    let table = table_from(input, "t.dat");
    assert_eq!(encode(&table), b"\"a\"|\"b\"\n\"1\"|\"2\"\n");
}

// ========================================================================
// Unquoted Dialect
// ========================================================================

#[test]
fn test_unquoted_file_round_trip() {
    let input = b"a|b\n1|2\n";

    let decoded = decode(input).unwrap();
    assert_eq!(decoded.headers, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(decoded.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    assert!(!decoded.quoted);

    let table = table_from(input, "t.dat");
    assert_eq!(encode(&table), input);
}

#[test]
fn test_unquoted_sample_round_trip() {
    let table = table_from(common::sample_dat(), "sample.dat");

    assert_eq!(encode(&table), common::sample_dat());
}

#[test]
fn test_missing_trailing_newline_is_normalized() {
    let input = b"a|b\n1|2";

    let table = table_from(input, "t.dat");

    assert_eq!(encode(&table), b"a|b\n1|2\n");
}

// ========================================================================
// Quote Detection
// ========================================================================

#[test]
fn test_detection_uses_first_line_only() {
    // Quoted header, unquoted data: the header decides
    assert!(detect_quoting(b"\"a\"|\"b\"\n1|2\n"));
    // Unquoted header, quoted data
    assert!(!detect_quoting(b"a|b\n\"1\"|\"2\"\n"));
}

#[test]
fn test_partial_quoting_counts_as_unquoted() {
    assert!(!detect_quoting(b"\"a\"|b\n"));
}

#[test]
fn test_detection_handles_crlf() {
    assert!(detect_quoting(b"\"a\"|\"b\"\r\n\"1\"|\"2\"\r\n"));
}

#[test]
fn test_empty_input_counts_as_unquoted() {
    assert!(!detect_quoting(b""));
}

// ========================================================================
// Edge Cases
// ========================================================================

#[test]
fn test_empty_input_decodes_to_empty_table() {
    let decoded = decode(b"").unwrap();

    assert!(decoded.headers.is_empty());
    assert!(decoded.rows.is_empty());
    assert!(!decoded.quoted);
}

#[test]
fn test_empty_table_encodes_to_zero_bytes() {
    assert!(encode(&Table::new()).is_empty());
}

#[test]
fn test_headers_only_file() {
    let input = b"a|b|c\n";

    let table = table_from(input, "t.dat");

    assert_eq!(table.headers.len(), 3);
    assert!(table.rows.is_empty());
    assert_eq!(encode(&table), input);
}

#[test]
fn test_blank_interior_lines_are_skipped() {
    let decoded = decode(b"a|b\n\n1|2\n\n\n3|4\n").unwrap();

    assert_eq!(decoded.rows.len(), 2);
    assert_eq!(decoded.rows[1], vec!["3".to_string(), "4".to_string()]);
}

#[test]
fn test_field_whitespace_is_trimmed() {
    let decoded = decode(b"a | b\n 1 |2 \n").unwrap();

    assert_eq!(decoded.headers, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(decoded.rows[0], vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn test_crlf_input_round_trips_with_lf() {
    let table = table_from(b"a|b\r\n1|2\r\n", "t.dat");

    assert_eq!(table.rows[0], vec!["1".to_string(), "2".to_string()]);
    assert_eq!(encode(&table), b"a|b\n1|2\n");
}

#[test]
fn test_ragged_rows_survive_round_trip() {
    let input = b"a|b|c\n1\n2|3|4|5\n";

    let table = table_from(input, "t.dat");

    assert_eq!(table.rows[0].len(), 1);
    assert_eq!(table.rows[1].len(), 4);
    assert_eq!(encode(&table), input);
}

#[test]
fn test_invalid_utf8_is_a_parse_error() {
    let err = decode(b"a|b\n\xff\xfe|2\n").unwrap_err();

    assert!(err.to_string().contains("DAT parse error"));
}

#[test]
fn test_unterminated_quote_rejects_the_file() {
    // A lone opening quote swallows the rest of the input; the file must
    // be rejected rather than collapsed into one field
    let err = decode(b"\"a|b\n1|2\n").unwrap_err();

    assert_eq!(err.line, Some(1));
    assert!(err.to_string().contains("unterminated quote"));
}
