//! Extraction of inline `Freq:` marker values from `;`-delimited trace files.

use crate::data::parse_integer_count;
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Settings for locating the marker cell in each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Prefix identifying the marker cell.
    pub marker: String,
    /// Character separating the marker name from its value.
    pub separator: char,
    /// Field delimiter of the input file.
    pub delimiter: u8,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker: "Freq:".to_string(),
            separator: ':',
            delimiter: b';',
        }
    }
}

impl ExtractConfig {
    /// Default settings with a different marker prefix.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            ..Self::default()
        }
    }
}

/// Extract the marker value from one row of cells.
///
/// The first cell starting with the marker wins. Its value is the text after
/// the first separator, trimmed, and must be a plain unsigned integer. Rows
/// without a marker cell yield 0.
pub fn extract_from_cells<'a, I>(cells: I, row: usize, config: &ExtractConfig) -> Result<u64>
where
    I: IntoIterator<Item = &'a str>,
{
    for cell in cells {
        if cell.starts_with(config.marker.as_str()) {
            let value = cell
                .split_once(config.separator)
                .map(|(_, rest)| rest)
                .unwrap_or("");
            return parse_integer_count(value, row, &config.marker);
        }
    }
    Ok(0)
}

/// Extract one count per row from a delimited file.
///
/// The file has no header and rows may have any number of cells. The result
/// has exactly one entry per line; blank lines count as rows without a
/// marker. Quoted cells may not span lines.
pub fn extract_frequencies<P: AsRef<Path>>(path: P, config: &ExtractConfig) -> Result<Vec<u64>> {
    let file = File::open(path)?;
    extract_frequencies_from_reader(BufReader::new(file), config)
}

/// Same as [`extract_frequencies`] over any buffered reader.
pub fn extract_frequencies_from_reader<R: BufRead>(
    reader: R,
    config: &ExtractConfig,
) -> Result<Vec<u64>> {
    let mut counts = Vec::new();
    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            counts.push(0);
            continue;
        }

        // One reader per line: the csv crate drops blank lines, which would
        // shift every later row.
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(false)
            .flexible(true)
            .buffer_capacity(line.len() + 1)
            .from_reader(line.as_bytes());
        let count = match csv_reader.records().next() {
            Some(record) => extract_from_cells(record?.iter(), row, config)?,
            None => 0,
        };
        counts.push(count);
    }

    tracing::debug!(rows = counts.len(), marker = %config.marker, "extracted frequencies");
    Ok(counts)
}
