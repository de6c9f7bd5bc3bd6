//! Console driver: run a command script against a fresh grid session

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use impactgrid::cli::{CliArgs, OutputFormat, ScriptInput};
use impactgrid::script;
use impactgrid::{update, AppModel, Cmd};

fn main() -> Result<()> {
    impactgrid::tracing::init();

    let config = CliArgs::parse().into_config();
    if config.save_config {
        config
            .save_grid_config()
            .map_err(anyhow::Error::msg)
            .context("Failed to save config")?;
    }
    let text = read_script(&config.input)?;
    let msgs = script::parse_script(&text).context("Failed to parse script")?;

    let mut model = AppModel::new(config.grid);
    tracing::info!(
        messages = msgs.len(),
        rows = model.table.row_count(),
        columns = model.table.column_count(),
        "session started"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for msg in msgs {
        let cmd = Cmd::from(update(&mut model, msg));
        if let Some(notice) = cmd.notice() {
            writeln!(out, "! {}", notice)?;
        }
    }

    let snapshot = model.snapshot();
    match config.output {
        OutputFormat::Text => write!(out, "{}", snapshot.to_text())?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            snapshot.to_json().context("Failed to serialize snapshot")?
        )?,
    }
    Ok(())
}

fn read_script(input: &ScriptInput) -> Result<String> {
    match input {
        ScriptInput::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        ScriptInput::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}
