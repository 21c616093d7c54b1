use clap::Parser;
use log::info;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use vk_registry::{list_enum_groups, load_enums_from_str, render_enums};

mod cli;

use crate::cli::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // RUST_LOG, when set, takes precedence over -v.
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let text = run(&cli)?;
    write_output(&cli, &text)
}

/// Reads the registry named by `cli` and renders the requested text.
fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let xml = fs::read_to_string(&cli.input)
        .map_err(|e| format!("failed to read {}: {}", cli.input.display(), e))?;

    if cli.list {
        let mut text = String::new();
        for name in list_enum_groups(&xml)? {
            text.push_str(&name);
            text.push('\n');
        }
        return Ok(text);
    }

    let groups = load_enums_from_str(&xml, &cli.selection())?;
    info!(
        "Extracted {} groups ({} constants) from {}",
        groups.len(),
        groups.iter().map(|g| g.constants.len()).sum::<usize>(),
        cli.input.display()
    );
    Ok(render_enums(&groups, cli.bitpos_style())?)
}

/// Writes `text` to `--output`, or to stdout when it is not set.
fn write_output(cli: &Cli, text: &str) -> Result<(), Box<dyn Error>> {
    match &cli.output {
        Some(path) => fs::write(path, text)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?,
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}
