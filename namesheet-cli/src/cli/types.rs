use clap::ValueEnum;
use namesheet_core::{DuplicatePolicy, HeaderMode, Preview};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum PreviewArg {
    Summary,
    Table,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Summary => Self::Summary,
            PreviewArg::Table => Self::Table,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for namesheet_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum HeaderArg {
    /// Header if the first row contains any text
    Auto,
    /// First row is always a header
    Present,
    /// First row is always data
    Absent,
}

impl From<HeaderArg> for HeaderMode {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Auto => Self::Auto,
            HeaderArg::Present => Self::Present,
            HeaderArg::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum DuplicatesArg {
    /// The last row for an old name wins
    LastWins,
    /// Rows repeating an old name are skipped
    Reject,
}

impl From<DuplicatesArg> for DuplicatePolicy {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::LastWins => Self::LastWins,
            DuplicatesArg::Reject => Self::Reject,
        }
    }
}
