#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod operations;
pub mod output;
pub mod plan;
pub mod preview;
pub mod report;

pub use config::{Config, DEFAULT_MAPPING_FILE};
pub use engine::{dry_run, execute, execute_with, DiskNamespace, DryRunNamespace, Namespace};
pub use error::{InvalidRowReason, NamesheetError, Result};
pub use mapping::{is_headerless, load_mapping, parse_rows, HeaderMode, MappingRow};
pub use operations::{check_directory, run_operation, RunOptions};
pub use output::{OutputFormat, OutputFormatter, VersionResult};
pub use plan::{
    build_plan, build_plan_with, file_name_of, DuplicatePolicy, RejectedRow, RenameEntry,
    RenamePlan, SupersededRow,
};
pub use preview::{render_report, render_summary, render_table, should_use_color, Preview};
pub use report::{RenameOutcome, RenameReport, ReportItem};
