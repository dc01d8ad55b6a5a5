//! Diagnostic summary of a subsampling run.

use crate::error::{PlotDataError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Summary printed after a subsampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsampleReport {
    /// Rows in the input.
    pub total_rows: usize,
    /// Distance between the first two selected indices, or `total_rows` when
    /// only one row is selected.
    pub interval: usize,
    /// Selected rows divided by input rows.
    pub selection_ratio: f64,
    /// Rows in the output.
    pub selected_rows: usize,
    /// Whether the first output count equals the first input count.
    pub first_count_matches: bool,
}

impl SubsampleReport {
    pub(crate) fn new(
        total_rows: usize,
        indices: &[usize],
        first_count_matches: bool,
    ) -> Self {
        let interval = match indices {
            [first, second, ..] => second - first,
            _ => total_rows,
        };
        Self {
            total_rows,
            interval,
            selection_ratio: indices.len() as f64 / total_rows as f64,
            selected_rows: indices.len(),
            first_count_matches,
        }
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ReportFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }
}

impl std::fmt::Display for SubsampleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total rows:       {}", self.total_rows)?;
        writeln!(f, "Interval:         {}", self.interval)?;
        writeln!(f, "Selection ratio:  {:.4}", self.selection_ratio)?;
        write!(f, "Selected rows:    {}", self.selected_rows)?;
        if !self.first_count_matches {
            write!(f, "\nFirst row is not the same!")?;
        }
        Ok(())
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for ReportFormat {
    type Err = PlotDataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(PlotDataError::InvalidParameter(format!(
                "Unknown report format '{}' (expected text, json or yaml)",
                other
            ))),
        }
    }
}
