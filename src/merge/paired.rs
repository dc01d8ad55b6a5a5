//! Paired merge: two equal-length tables interleaved as With/Without rows.

use crate::data::{LabeledTable, Table};
use crate::error::{PlotDataError, Result};
use crate::merge::manifest::label_rows;
use std::path::Path;

/// Labels attached to the two sides of a paired merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedLabels {
    pub with: String,
    pub without: String,
}

impl Default for PairedLabels {
    fn default() -> Self {
        Self {
            with: "With".to_string(),
            without: "Without".to_string(),
        }
    }
}

/// Interleave two tables row by row with the default `With`/`Without` labels.
///
/// Row `i` of `with` is followed by row `i` of `without`. Both tables need
/// `ID` and `Count` columns.
///
/// # Errors
/// `RowCountMismatch` when the tables differ in length. Nothing is merged in
/// that case.
pub fn merge_paired(with: &Table, without: &Table) -> Result<LabeledTable> {
    merge_paired_with_labels(with, without, &PairedLabels::default())
}

/// Interleave two tables row by row using custom labels.
pub fn merge_paired_with_labels(
    with: &Table,
    without: &Table,
    labels: &PairedLabels,
) -> Result<LabeledTable> {
    if with.n_rows() != without.n_rows() {
        return Err(PlotDataError::RowCountMismatch {
            with: with.n_rows(),
            without: without.n_rows(),
        });
    }

    let with_rows = label_rows(with, &labels.with)?;
    let without_rows = label_rows(without, &labels.without)?;

    let mut merged = LabeledTable::with_capacity(with_rows.len() * 2);
    for (a, b) in with_rows.into_iter().zip(without_rows) {
        merged.push(a);
        merged.push(b);
    }
    Ok(merged)
}

/// Load both tables and merge them.
pub fn merge_paired_files<P: AsRef<Path>, Q: AsRef<Path>>(
    with_path: P,
    without_path: Q,
) -> Result<LabeledTable> {
    let with = Table::from_tsv(with_path)?;
    let without = Table::from_tsv(without_path)?;
    tracing::debug!(
        with = with.n_rows(),
        without = without.n_rows(),
        "loaded paired tables"
    );
    merge_paired(&with, &without)
}
