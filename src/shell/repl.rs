//! Interactive command loop
//!
//! Owns the [`TableService`] plus the session state around it: the path
//! the table came from, the recent-files list, and whether prompts are
//! answered automatically. The same [`Shell::execute`] path serves both
//! the interactive prompt and `--command` scripts.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::EditorConfig;
use crate::dat::{self, AutoConfirm, CellPosition, ConfirmDelete, DeleteOutcome};
use crate::recent_files::RecentFiles;
use crate::service::TableService;
use crate::shell::command::ShellCommand;
use crate::shell::grid;
use crate::util::{filename_for_display, validate_file_for_opening};

/// Matches listed by `find` before the output is cut off
const MAX_FIND_RESULTS: usize = 20;

const HELP: &str = "\
Commands:
  open <file>            Load a DAT file
  show                   Print the current table
  set <row> <col> [val]  Replace a cell (1-based row/col; empty value clears)
  insert [pos]           Insert a blank row (0 = top, N = after row N, default append)
  delete <row>           Delete a row (asks when the row still has data)
  find <text>            List cells containing <text> (case-insensitive)
  write                  Save to the opened file
  export <file>          Save a copy to a different file
  info                   Show file name, shape, quoting, and unsaved state
  recent                 List recently opened files
  help                   Show this help
  quit                   Exit (asks when there are unsaved changes)

Use --yes when scripting delete or quit with --command.";

/// Whether the command loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive editor session over one [`TableService`]
pub struct Shell {
    service: TableService,
    config: EditorConfig,
    recent: RecentFiles,
    auto_confirm: bool,
    current_path: Option<PathBuf>,
}

impl Shell {
    pub fn new(config: EditorConfig, auto_confirm: bool) -> Self {
        Self {
            service: TableService::new(),
            config,
            recent: RecentFiles::load(),
            auto_confirm,
            current_path: None,
        }
    }

    /// Load a DAT file from disk into the session
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let display_name = filename_for_display(path);
        if let Err(e) = validate_file_for_opening(path) {
            anyhow::bail!("{}", e.user_message(&display_name));
        }

        let bytes =
            fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let summary = self.service.upload(display_name.clone(), &bytes)?;

        self.current_path = Some(path.to_path_buf());
        self.recent.add(path.to_path_buf());
        println!(
            "Opened {}: {} rows x {} columns",
            display_name, summary.rows, summary.columns
        );
        Ok(())
    }

    /// Prompt/read/execute until quit or end of input
    pub fn run_interactive(&mut self) -> Result<()> {
        println!(
            "datgrid {} (type 'help' for commands)",
            env!("CARGO_PKG_VERSION")
        );
        loop {
            print!("datgrid> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                // End of input; there is no terminal left to ask anything on
                println!();
                if let Some(notice) = self.unsaved_notice() {
                    eprintln!("{}", notice);
                }
                break;
            }

            match ShellCommand::parse(&line) {
                Ok(None) => {}
                Ok(Some(cmd)) => match self.execute(cmd) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => {
                        if self.confirm_discard() {
                            break;
                        }
                    }
                    Err(e) => eprintln!("error: {:#}", e),
                },
                Err(msg) => eprintln!("error: {}", msg),
            }
        }
        self.persist_recent();
        Ok(())
    }

    /// Execute a semicolon-separated command script, stopping at the first
    /// failing command
    pub fn run_script(&mut self, script: &str) -> Result<()> {
        for part in script.split(';') {
            let Some(cmd) = ShellCommand::parse(part).map_err(anyhow::Error::msg)? else {
                continue;
            };
            if self.execute(cmd)? == Flow::Quit {
                break;
            }
        }
        self.persist_recent();
        Ok(())
    }

    /// Run one command against the session
    pub fn execute(&mut self, cmd: ShellCommand) -> Result<Flow> {
        match cmd {
            ShellCommand::Open(path) => {
                self.open(&path)?;
            }
            ShellCommand::Show => {
                let table = self.service.snapshot();
                print!("{}", grid::render_table(&table, self.config.max_show_rows));
            }
            ShellCommand::Set { row, col, value } => {
                self.service.edit_cell(row, col, value)?;
            }
            ShellCommand::Insert { position } => {
                let index = self.service.insert_row(position);
                println!("Inserted blank row {}", index + 1);
            }
            ShellCommand::Delete { row } => {
                let outcome = if self.auto_confirm || !self.config.confirm_deletes {
                    self.service.delete_row(row, &mut AutoConfirm)?
                } else {
                    self.service.delete_row(row, &mut PromptConfirm)?
                };
                match outcome {
                    DeleteOutcome::Deleted => println!("Deleted row {}", row + 1),
                    DeleteOutcome::Refused => println!("Delete cancelled"),
                }
            }
            ShellCommand::Find { query } => {
                let table = self.service.snapshot();
                let mut matches = dat::find_matches(&table, &query);
                let hits: Vec<CellPosition> = matches.by_ref().take(MAX_FIND_RESULTS).collect();
                let truncated = matches.next().is_some();

                if hits.is_empty() {
                    println!("No matches for '{}'", query);
                } else {
                    for pos in &hits {
                        let cell = table.get(pos.row, pos.col).unwrap_or_default();
                        println!(
                            "row {} col {}: {}",
                            pos.row + 1,
                            pos.col + 1,
                            grid::truncate_text(cell, 60)
                        );
                    }
                    if truncated {
                        println!("... more matches not shown");
                    }
                }
            }
            ShellCommand::Write => {
                let Some(path) = self.current_path.clone() else {
                    anyhow::bail!("no file loaded; use 'export <file>'");
                };
                self.save_to(&path)?;
            }
            ShellCommand::Export(path) => {
                self.save_to(&path)?;
            }
            ShellCommand::Info => {
                let table = self.service.snapshot();
                if table.file_name.is_empty() && table.is_empty() {
                    println!("No file loaded");
                } else {
                    println!("File:    {}", table.file_name);
                    println!("Rows:    {}", table.rows.len());
                    println!("Columns: {}", table.column_count());
                    println!(
                        "Quoting: {}",
                        if table.quoted {
                            "every field quoted"
                        } else {
                            "unquoted"
                        }
                    );
                    println!(
                        "Unsaved: {}",
                        if self.service.is_dirty() { "yes" } else { "no" }
                    );
                }
            }
            ShellCommand::Recent => {
                if self.recent.entries.is_empty() {
                    println!("No recent files");
                } else {
                    for entry in &self.recent.entries {
                        println!("{}  ({})", entry.path.display(), entry.time_ago());
                    }
                }
            }
            ShellCommand::Help => {
                println!("{}", HELP);
            }
            ShellCommand::Quit => {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Encode the table and write it to `path`
    fn save_to(&mut self, path: &Path) -> Result<()> {
        let bytes = dat::encode(&self.service.snapshot());
        fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        self.service.mark_saved();
        println!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// OK to quit? True unless there are unsaved changes the user wants kept
    fn confirm_discard(&self) -> bool {
        if self.auto_confirm || !self.service.is_dirty() {
            return true;
        }
        prompt_yes_no("Unsaved changes. Discard and quit? [y/N] ")
    }

    /// Warning for ends of input that skip the quit confirmation
    fn unsaved_notice(&self) -> Option<&'static str> {
        if self.service.is_dirty() {
            Some("warning: unsaved changes discarded")
        } else {
            None
        }
    }

    fn persist_recent(&self) {
        if self.recent.entries.is_empty() {
            return;
        }
        if let Err(e) = self.recent.save() {
            tracing::warn!("Failed to save recent files: {}", e);
        }
    }
}

/// Asks on stdout/stdin before deleting a row that still holds data
struct PromptConfirm;

impl ConfirmDelete for PromptConfirm {
    fn confirm(&mut self, row_index: usize, row: &[String]) -> bool {
        let preview = grid::truncate_text(&row.join(" | "), 60);
        prompt_yes_no(&format!(
            "Delete row {} ({})? [y/N] ",
            row_index + 1,
            preview
        ))
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
