//! Shell command parsing
//!
//! One command per line. Row and column arguments are 1-based as shown
//! by `show`; they are converted to 0-based indices here, except for
//! `insert` whose positional argument keeps the grid's own numbering
//! (`0` inserts at the top, `N` inserts after row `N`, absent appends).

use std::path::PathBuf;

/// A single parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Load a DAT file from disk
    Open(PathBuf),
    /// Print the current table
    Show,
    /// Replace one cell (0-based indices after parsing)
    Set { row: usize, col: usize, value: String },
    /// Insert a blank row at a grid position
    Insert { position: Option<usize> },
    /// Delete one row (0-based index after parsing)
    Delete { row: usize },
    /// List cells containing a substring
    Find { query: String },
    /// Save to the file the table was opened from
    Write,
    /// Save to an explicit path
    Export(PathBuf),
    /// Print table metadata
    Info,
    /// List recently opened files
    Recent,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; blank lines parse to `None`
    pub fn parse(input: &str) -> Result<Option<Self>, String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let mut parts = input.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim_start();

        let parsed = match command {
            "open" => {
                if rest.is_empty() {
                    return Err("usage: open <file>".to_string());
                }
                Self::Open(PathBuf::from(rest))
            }
            "show" => Self::Show,
            "set" => {
                let (row_arg, rest) = next_token(rest);
                let (col_arg, value) = next_token(rest);
                Self::Set {
                    row: parse_index(row_arg, "row")?,
                    col: parse_index(col_arg, "column")?,
                    value: value.to_string(),
                }
            }
            "insert" => {
                let position = if rest.is_empty() {
                    None
                } else {
                    let n = rest
                        .parse::<usize>()
                        .map_err(|_| format!("position must be a number, got '{}'", rest))?;
                    Some(n)
                };
                Self::Insert { position }
            }
            "delete" => Self::Delete {
                row: parse_index(rest, "row")?,
            },
            "find" => {
                if rest.is_empty() {
                    return Err("usage: find <text>".to_string());
                }
                Self::Find {
                    query: rest.to_string(),
                }
            }
            "write" => Self::Write,
            "export" => {
                if rest.is_empty() {
                    return Err("usage: export <file>".to_string());
                }
                Self::Export(PathBuf::from(rest))
            }
            "info" => Self::Info,
            "recent" => Self::Recent,
            "help" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(format!("unknown command: {} (try 'help')", other));
            }
        };

        Ok(Some(parsed))
    }
}

/// Split the leading whitespace-run-delimited token off `s`, returning
/// the token and the remainder with its leading whitespace removed
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim_start()),
        None => (s, ""),
    }
}

/// Parse a 1-based row/column argument into a 0-based index
fn parse_index(arg: &str, what: &str) -> Result<usize, String> {
    let n: usize = arg
        .parse()
        .map_err(|_| format!("{} must be a number, got '{}'", what, arg))?;
    if n == 0 {
        return Err(format!("{} numbers start at 1", what));
    }
    Ok(n - 1)
}
