use anyhow::{Context, Result};
use clap::Parser;
use namesheet_core::{should_use_color, Config, NamesheetError, OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod logging;
mod plan;
mod run;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    };

    let use_color = !cli.no_color && should_use_color(config.defaults.use_color);

    if let Err(e) = logging::init(cli.verbose, !cli.no_color && io::stderr().is_terminal()) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
    tracing::debug!(?config, "Loaded config");

    let result = match cli.command {
        Commands::Run {
            mapping,
            dry_run,
            preview,
            output,
            quiet,
        } => run::handle_run(mapping, dry_run, preview, output, quiet, &config, use_color),

        Commands::Plan {
            mapping,
            preview,
            output,
            quiet,
        } => plan::handle_plan(mapping, preview, output, quiet, &config, use_color),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 2 for bad input, 3 for anything else
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<NamesheetError>() {
        Some(e) if e.is_invalid_input() => 2,
        _ => 3,
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "namesheet".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
