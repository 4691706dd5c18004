use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{DuplicatesArg, HeaderArg, OutputFormat, PreviewArg};

/// Rename the files in a folder from an old/new spreadsheet mapping
#[derive(Parser, Debug)]
#[command(name = "namesheet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

/// Where the files and the mapping live, and how to read the mapping
#[derive(Args, Debug, Clone)]
pub struct MappingArgs {
    /// Folder containing the files to rename. Defaults to the current directory
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Mapping spreadsheet (defaults to rename.xlsx inside DIR, or the configured name)
    #[arg(short, long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// How to treat the first row of the sheet (defaults from config if not specified)
    #[arg(long, value_enum)]
    pub header: Option<HeaderArg>,

    /// What to do when an old name appears in more than one row (defaults from config)
    #[arg(long, value_enum)]
    pub duplicates: Option<DuplicatesArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename the files listed in the mapping
    Run {
        #[command(flatten)]
        mapping: MappingArgs,

        /// Show what would be renamed without touching any file
        #[arg(long)]
        dry_run: bool,

        /// Preview output format (defaults from config if not specified)
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output (alias for --preview none)
        #[arg(long)]
        quiet: bool,
    },

    /// Show what a run would do, without renaming anything
    Plan {
        #[command(flatten)]
        mapping: MappingArgs,

        /// Preview output format (defaults to table)
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output (alias for --preview none)
        #[arg(long)]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
