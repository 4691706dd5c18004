use crate::report::{RenameOutcome, RenameReport};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Summary,
    Table,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "table" => Ok(Self::Table),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(|| io::stdout().is_terminal())
}

/// Render the report in the requested preview format
pub fn render_report(report: &RenameReport, format: Preview, use_color: bool) -> String {
    match format {
        Preview::Summary => render_summary(report, use_color),
        Preview::Table => {
            let mut output = render_table(report, use_color);
            output.push('\n');
            output.push_str(&render_summary(report, use_color));
            output
        },
        Preview::None => String::new(),
    }
}

fn paint(text: &str, color: AnsiColor, use_color: bool) -> String {
    if use_color {
        color.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Headline plus the list of entries that were not renamed.
pub fn render_summary(report: &RenameReport, use_color: bool) -> String {
    let mut output = String::new();

    let headline = if report.dry_run {
        format!("Dry run: {} files would be renamed.", report.succeeded())
    } else {
        format!("Done! {} files renamed successfully.", report.succeeded())
    };
    writeln!(output, "{}", paint(&headline, AnsiColor::Green, use_color)).unwrap();

    let failures = report.failure_messages();
    if !failures.is_empty() {
        let header = if report.dry_run {
            format!("{} files would not be renamed:", failures.len())
        } else {
            format!("{} files could not be renamed:", failures.len())
        };
        writeln!(output, "{}", paint(&header, AnsiColor::Yellow, use_color)).unwrap();
        for failure in failures {
            writeln!(output, "  {}", failure).unwrap();
        }
    }

    let rejected = report.rejected_messages();
    if !rejected.is_empty() {
        let header = format!("Skipped {} mapping rows:", rejected.len());
        writeln!(output, "{}", paint(&header, AnsiColor::Yellow, use_color)).unwrap();
        for row in rejected {
            writeln!(output, "  {}", row).unwrap();
        }
    }

    let superseded = report.superseded_messages();
    if !superseded.is_empty() {
        let header = format!("Overridden {} mapping rows:", superseded.len());
        writeln!(output, "{}", paint(&header, AnsiColor::Yellow, use_color)).unwrap();
        for row in superseded {
            writeln!(output, "  {}", row).unwrap();
        }
    }

    output
}

fn outcome_color(outcome: &RenameOutcome) -> Color {
    match outcome {
        RenameOutcome::Succeeded => Color::Green,
        RenameOutcome::SkippedAlreadyExists | RenameOutcome::SkippedSourceMissing => {
            Color::Yellow
        },
        RenameOutcome::Failed { .. } => Color::Red,
    }
}

/// One row per plan entry, in plan order.
pub fn render_table(report: &RenameReport, use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Old name").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
            Cell::new("Result").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Old name", "New name", "Result"]);
    }

    for item in &report.items {
        let result = if report.dry_run && item.outcome.is_success() {
            "would rename".to_string()
        } else {
            item.outcome.to_string()
        };
        let result_cell = if use_color {
            Cell::new(result).fg(outcome_color(&item.outcome))
        } else {
            Cell::new(result)
        };
        table.add_row(vec![
            Cell::new(&item.entry.old_name),
            Cell::new(&item.entry.new_name),
            result_cell,
        ]);
    }

    table.to_string()
}
