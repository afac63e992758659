use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;
use std::str::FromStr;

use crate::transform::TransformKind;

/// Output format for the batch report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameStatus {
    Success,
    Skipped,
    Failed,
}

/// What happened to one file of the batch.
///
/// For `Skipped` the final name equals the original. For `Failed` it is the
/// name the rename tried to assign; the file itself keeps its original name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub original_name: String,
    pub final_name: String,
    pub status: RenameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl RenameOutcome {
    pub fn success(original: impl Into<String>, final_name: impl Into<String>) -> Self {
        Self {
            original_name: original.into(),
            final_name: final_name.into(),
            status: RenameStatus::Success,
            error_detail: None,
        }
    }

    pub fn skipped(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            final_name: original.clone(),
            original_name: original,
            status: RenameStatus::Skipped,
            error_detail: None,
        }
    }

    pub fn failed(
        original: impl Into<String>,
        attempted: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            original_name: original.into(),
            final_name: attempted.into(),
            status: RenameStatus::Failed,
            error_detail: Some(detail.into()),
        }
    }
}

/// Result of a batch run, one outcome per listed file in processing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub directory: PathBuf,
    pub transform: TransformKind,
    pub started_at: String,
    pub interrupted: bool,
    pub outcomes: Vec<RenameOutcome>,
}

impl BatchReport {
    fn count(&self, status: RenameStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(RenameStatus::Success)
    }

    pub fn skipped(&self) -> usize {
        self.count(RenameStatus::Skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(RenameStatus::Failed)
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.status == RenameStatus::Failed)
    }

    /// Render the report, optionally with ANSI colors.
    pub fn render(&self, format: OutputFormat, use_color: bool) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => render_summary(self, use_color),
            OutputFormat::Table => render_table(self, use_color),
        }
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for BatchReport {
    fn format(&self, format: OutputFormat) -> String {
        self.render(format, false)
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": !self.has_failures() && !self.interrupted,
            "operation": self.transform,
            "directory": self.directory,
            "started_at": self.started_at,
            "interrupted": self.interrupted,
            "summary": {
                "files": self.outcomes.len(),
                "renamed": self.renamed(),
                "skipped": self.skipped(),
                "failed": self.failed(),
            },
            "outcomes": self.outcomes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        render_summary(self, false)
    }
}

fn render_summary(report: &BatchReport, use_color: bool) -> String {
    let mut output = String::new();

    for outcome in &report.outcomes {
        let line = match outcome.status {
            RenameStatus::Success => format!(
                "{} Renamed: {} -> {}",
                mark("✓", AnsiColor::Green, use_color),
                outcome.original_name,
                outcome.final_name
            ),
            RenameStatus::Skipped => format!(
                "{} Skipped: {} (unchanged)",
                mark("-", AnsiColor::DarkGray, use_color),
                outcome.original_name
            ),
            RenameStatus::Failed => format!(
                "{} Failed to rename {} -> {}: {}",
                mark("✗", AnsiColor::Red, use_color),
                outcome.original_name,
                outcome.final_name,
                outcome.error_detail.as_deref().unwrap_or("unknown error")
            ),
        };
        writeln!(output, "{line}").unwrap();
    }

    if report.outcomes.is_empty() {
        writeln!(output, "No files found in {}", report.directory.display()).unwrap();
    }

    if report.interrupted {
        writeln!(output, "Interrupted before all files were processed").unwrap();
    }

    writeln!(
        output,
        "{} renamed, {} skipped, {} failed",
        report.renamed(),
        report.skipped(),
        report.failed()
    )
    .unwrap();

    output
}

fn mark(symbol: &str, color: AnsiColor, use_color: bool) -> String {
    if use_color {
        color.paint(symbol).to_string()
    } else {
        symbol.to_string()
    }
}

fn render_table(report: &BatchReport, use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Original").fg(Color::Cyan),
            Cell::new("New").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Detail").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Original", "New", "Status", "Detail"]);
    }

    for outcome in &report.outcomes {
        let (status, color) = match outcome.status {
            RenameStatus::Success => ("renamed", Color::Green),
            RenameStatus::Skipped => ("skipped", Color::DarkGrey),
            RenameStatus::Failed => ("failed", Color::Red),
        };
        let status_cell = if use_color {
            Cell::new(status).fg(color)
        } else {
            Cell::new(status)
        };
        table.add_row(vec![
            Cell::new(&outcome.original_name),
            Cell::new(&outcome.final_name),
            status_cell,
            Cell::new(outcome.error_detail.as_deref().unwrap_or("")),
        ]);
    }

    let mut output = table.to_string();
    output.push('\n');
    writeln!(
        output,
        "{} renamed, {} skipped, {} failed",
        report.renamed(),
        report.skipped(),
        report.failed()
    )
    .unwrap();
    output
}
