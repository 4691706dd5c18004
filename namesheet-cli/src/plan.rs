use anyhow::Result;
use namesheet_core::{run_operation, Config, Preview};

use crate::cli::args::MappingArgs;
use crate::cli::{OutputFormat, PreviewArg};
use crate::run::{print_report, run_options};

/// Dry-run the mapping and show the per-file outcome table.
pub fn handle_plan(
    args: MappingArgs,
    preview: Option<PreviewArg>,
    output: OutputFormat,
    quiet: bool,
    config: &Config,
    use_color: bool,
) -> Result<()> {
    let options = run_options(args, true, config);
    let report = run_operation(&options)?;

    print_report(&report, preview, Preview::Table, output, quiet, use_color);
    Ok(())
}
