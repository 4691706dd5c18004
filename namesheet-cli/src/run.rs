use anyhow::Result;
use namesheet_core::{
    render_report, run_operation, Config, OutputFormatter, Preview, RenameReport, RunOptions,
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::cli::args::MappingArgs;
use crate::cli::{OutputFormat, PreviewArg};

/// Merge CLI arguments over config defaults.
pub fn run_options(args: MappingArgs, dry_run: bool, config: &Config) -> RunOptions {
    let directory = args.dir.unwrap_or_else(|| PathBuf::from("."));
    let mapping = args
        .mapping
        .unwrap_or_else(|| directory.join(&config.defaults.mapping_file));

    RunOptions {
        directory,
        mapping: Some(mapping),
        header: args.header.map_or(config.defaults.header, Into::into),
        duplicates: args
            .duplicates
            .map_or(config.defaults.duplicates, Into::into),
        dry_run,
    }
}

pub fn print_report(
    report: &RenameReport,
    preview: Option<PreviewArg>,
    default_preview: Preview,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) {
    match output {
        OutputFormat::Json => {
            println!("{}", report.format_json());
        },
        OutputFormat::Summary => {
            let format = if quiet {
                Preview::None
            } else {
                preview.map_or(default_preview, Into::into)
            };
            print!("{}", render_report(report, format, use_color));
        },
    }
}

pub fn handle_run(
    args: MappingArgs,
    dry_run: bool,
    preview: Option<PreviewArg>,
    output: OutputFormat,
    quiet: bool,
    config: &Config,
    use_color: bool,
) -> Result<()> {
    let options = run_options(args, dry_run, config);
    let report = run_operation(&options)?;
    for line in report.success_messages() {
        info!("{line}");
    }

    let default_preview =
        Preview::from_str(&config.defaults.preview_format).unwrap_or(Preview::Summary);
    print_report(&report, preview, default_preview, output, quiet, use_color);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use namesheet_core::{DuplicatePolicy, HeaderMode};
    use std::path::Path;

    fn args(dir: Option<&str>, mapping: Option<&str>) -> MappingArgs {
        MappingArgs {
            dir: dir.map(PathBuf::from),
            mapping: mapping.map(PathBuf::from),
            header: None,
            duplicates: None,
        }
    }

    #[test]
    fn test_mapping_defaults_to_config_name_inside_dir() {
        let mut config = Config::default();
        config.defaults.mapping_file = "names.ods".to_string();

        let options = run_options(args(Some("photos"), None), false, &config);
        assert_eq!(options.directory, Path::new("photos"));
        assert_eq!(options.mapping, Some(PathBuf::from("photos").join("names.ods")));
    }

    #[test]
    fn test_explicit_mapping_and_flags_win() {
        let mut config = Config::default();
        config.defaults.duplicates = DuplicatePolicy::Reject;

        let mut cli_args = args(None, Some("other/map.xlsx"));
        cli_args.header = Some(crate::cli::HeaderArg::Present);
        let options = run_options(cli_args, true, &config);

        assert_eq!(options.directory, Path::new("."));
        assert_eq!(options.mapping, Some(PathBuf::from("other/map.xlsx")));
        assert_eq!(options.header, HeaderMode::Present);
        assert_eq!(options.duplicates, DuplicatePolicy::Reject);
        assert!(options.dry_run);
    }
}
