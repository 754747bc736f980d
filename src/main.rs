use anyhow::Result;
use clap::Parser;

use datgrid::cli::{CliArgs, RunMode};
use datgrid::config::EditorConfig;
use datgrid::shell::Shell;

fn main() -> Result<()> {
    datgrid::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();
    let mut shell = Shell::new(config, args.yes);

    if let Some(path) = &args.file {
        shell.open(path)?;
    }

    match args.run_mode() {
        RunMode::Script(script) => shell.run_script(&script),
        RunMode::Interactive => shell.run_interactive(),
    }
}
