//! Evenly spaced index selection over an ordered sequence.

use crate::data::{format_id, SamplePoint, SampleSeries, Table, COUNT_COLUMN, ID_COLUMN};
use crate::error::{PlotDataError, Result};
use crate::subsample::report::SubsampleReport;

/// Select `k` evenly spaced indices spanning `[0, n - 1]`.
///
/// The step `(n - 1) / (k - 1)` is computed in `f64` and index `i` is
/// `i * step` truncated toward zero, with the last index pinned to `n - 1`.
/// This reproduces integer-cast `linspace`, including the rows it drops when
/// `i * step` lands just below a whole number. With `k == 1` only index 0 is
/// selected. Repeated indices are kept.
///
/// # Errors
/// `InvalidTarget` when `k` is 0 or larger than `n`.
pub fn uniform_indices(n: usize, k: usize) -> Result<Vec<usize>> {
    if k == 0 || k > n {
        return Err(PlotDataError::InvalidTarget {
            target: k,
            available: n,
        });
    }
    if k == 1 {
        return Ok(vec![0]);
    }

    let step = (n - 1) as f64 / (k - 1) as f64;
    let mut indices: Vec<usize> = (0..k).map(|i| (i as f64 * step) as usize).collect();
    indices[k - 1] = n - 1;
    Ok(indices)
}

/// Normalized identifiers `1/k, 2/k, ..., k/k`.
pub fn normalized_ids(k: usize) -> Vec<f64> {
    (1..=k).map(|i| i as f64 / k as f64).collect()
}

/// Subsample a raw count sequence down to `k` points.
pub fn subsample_counts(counts: &[u64], k: usize) -> Result<(SampleSeries, SubsampleReport)> {
    let indices = uniform_indices(counts.len(), k)?;

    let points: Vec<SamplePoint> = indices
        .iter()
        .zip(normalized_ids(k))
        .map(|(&idx, id)| SamplePoint {
            id,
            count: counts[idx],
        })
        .collect();

    let first_count_matches = check_first_count(counts[0], points[0].count);
    let report = SubsampleReport::new(counts.len(), &indices, first_count_matches);
    Ok((SampleSeries::new(points), report))
}

/// Subsample the rows of a table down to `k` rows.
///
/// All columns are kept. The `ID` column is overwritten with normalized
/// identifiers, and appended when the input has none. The table must have a
/// `Count` column; every selected count is parsed and written back as a
/// plain integer.
pub fn subsample_table(table: &Table, k: usize) -> Result<(Table, SubsampleReport)> {
    let count_col = table.column_index(COUNT_COLUMN)?;
    let indices = uniform_indices(table.n_rows(), k)?;

    let counts = indices
        .iter()
        .map(|&row| table.count_at(row, count_col))
        .collect::<Result<Vec<u64>>>()?;

    let mut selected = table.select_rows(&indices)?;
    selected.set_column(COUNT_COLUMN, counts.iter().map(u64::to_string).collect())?;
    let ids = normalized_ids(k).into_iter().map(format_id).collect();
    selected.set_column(ID_COLUMN, ids)?;

    let first_count_matches = check_first_count(table.count_at(0, count_col)?, counts[0]);
    let report = SubsampleReport::new(table.n_rows(), &indices, first_count_matches);
    Ok((selected, report))
}

/// Index 0 is always selected, so a mismatch means the input changed under us.
fn check_first_count(original: u64, selected: u64) -> bool {
    if original != selected {
        tracing::warn!(
            original,
            selected,
            "first selected count differs from first input count"
        );
        return false;
    }
    true
}
