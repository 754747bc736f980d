//! Case-insensitive substring search over table cells

use super::table::{CellPosition, Table};

/// Find every data cell containing `query`, scanning rows top to bottom
/// and cells left to right
///
/// Matching is case-insensitive substring containment. Header cells are
/// not searched. The returned iterator is lazy: nothing is scanned until
/// it is advanced, so taking the first hit on a large table stays cheap.
/// An empty query matches nothing.
pub fn find_matches<'a>(table: &'a Table, query: &str) -> Matches<'a> {
    Matches {
        rows: &table.rows,
        query: query.to_lowercase(),
        row: 0,
        col: 0,
    }
}

/// Lazy iterator over matching cell positions, in row-major order
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    rows: &'a [Vec<String>],
    query: String,
    row: usize,
    col: usize,
}

impl Iterator for Matches<'_> {
    type Item = CellPosition;

    fn next(&mut self) -> Option<CellPosition> {
        if self.query.is_empty() {
            return None;
        }

        while self.row < self.rows.len() {
            let cells = &self.rows[self.row];
            while self.col < cells.len() {
                let col = self.col;
                self.col += 1;
                if cells[col].to_lowercase().contains(&self.query) {
                    return Some(CellPosition::new(self.row, col));
                }
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            headers: vec!["name".to_string(), "city".to_string()],
            rows: vec![
                vec!["Alice".to_string(), "Lisbon".to_string()],
                vec!["Bob".to_string(), "Berlin".to_string()],
                vec!["Alicia".to_string(), "Oslo".to_string()],
            ],
            quoted: false,
            file_name: String::new(),
        }
    }

    #[test]
    fn test_matches_in_row_major_order() {
        let table = sample();

        let hits: Vec<CellPosition> = find_matches(&table, "li").collect();

        assert_eq!(
            hits,
            vec![
                CellPosition::new(0, 0),
                CellPosition::new(0, 1),
                CellPosition::new(1, 1),
                CellPosition::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let table = sample();

        let hits: Vec<CellPosition> = find_matches(&table, "ALICE").collect();

        assert_eq!(hits, vec![CellPosition::new(0, 0)]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let table = sample();

        assert_eq!(find_matches(&table, "").next(), None);
    }

    #[test]
    fn test_headers_are_not_searched() {
        let table = sample();

        assert_eq!(find_matches(&table, "city").next(), None);
    }

    #[test]
    fn test_no_match() {
        let table = sample();

        assert_eq!(find_matches(&table, "zebra").next(), None);
    }

    #[test]
    fn test_clone_resumes_independently() {
        let table = sample();
        let mut first = find_matches(&table, "li");
        first.next();

        let mut resumed = first.clone();

        assert_eq!(first.next(), Some(CellPosition::new(0, 1)));
        assert_eq!(resumed.next(), Some(CellPosition::new(0, 1)));
        assert_eq!(resumed.next(), Some(CellPosition::new(1, 1)));
    }

    #[test]
    fn test_search_ragged_rows() {
        let mut table = sample();
        table.rows.push(vec!["Bo".to_string()]);

        let hits: Vec<CellPosition> = find_matches(&table, "bo").collect();

        assert_eq!(
            hits,
            vec![
                CellPosition::new(0, 1),
                CellPosition::new(1, 0),
                CellPosition::new(3, 0),
            ]
        );
    }
}
