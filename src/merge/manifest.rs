//! Manifest-driven merge: every listed table tagged with a filename label.

use crate::data::{LabeledRow, LabeledTable, Table, COUNT_COLUMN, ID_COLUMN};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Summary of one merged input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSource {
    pub path: PathBuf,
    pub label: String,
    pub rows: usize,
}

/// Derive a legend label from a file name.
///
/// Takes the part of the base name before the first `_` and maps every `-`
/// to `2`, so `foo-bar_20230101.csv` becomes `foo2bar`. A name without `_`
/// is used whole, extension included.
pub fn derive_label<P: AsRef<Path>>(path: P) -> String {
    let base = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let prefix = base.split('_').next().unwrap_or_default();
    prefix.replace('-', "2")
}

/// Read the file list from a tab-delimited manifest.
///
/// The first line is a header. Each following row names one input file in
/// its first column; blank entries are skipped.
pub fn read_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let table = Table::from_tsv(path)?;
    Ok(table
        .rows()
        .iter()
        .map(|row| row[0].trim())
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Tag every row of a table with `label`.
///
/// The table needs `ID` and `Count` columns.
pub(crate) fn label_rows(table: &Table, label: &str) -> Result<Vec<LabeledRow>> {
    let id_col = table.column_index(ID_COLUMN)?;
    let count_col = table.column_index(COUNT_COLUMN)?;
    (0..table.n_rows())
        .map(|row| {
            Ok(LabeledRow::new(
                table.cell(row, id_col),
                label,
                table.count_at(row, count_col)?,
            ))
        })
        .collect()
}

/// Concatenate every table listed in a manifest, in manifest order.
///
/// All inputs are read before returning, so nothing is written when any of
/// them fails to load or parse.
pub fn merge_manifest<P: AsRef<Path>>(manifest: P) -> Result<(LabeledTable, Vec<MergedSource>)> {
    let files = read_manifest(manifest)?;
    if files.is_empty() {
        tracing::warn!("manifest lists no files");
    }

    let mut merged = LabeledTable::new();
    let mut sources = Vec::with_capacity(files.len());

    for path in files {
        let label = derive_label(&path);
        let table = Table::from_tsv(&path)?;
        tracing::debug!(path = %path.display(), %label, rows = table.n_rows(), "merging table");

        merged.extend(label_rows(&table, &label)?);
        sources.push(MergedSource {
            path,
            label,
            rows: table.n_rows(),
        });
    }

    Ok((merged, sources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotDataError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_derive_label() {
        assert_eq!(derive_label("foo-bar_20230101.csv"), "foo2bar");
        assert_eq!(derive_label("/data/runs/lru-cache_x_y.tsv"), "lru2cache");
        assert_eq!(derive_label("plain.tsv"), "plain.tsv");
        assert_eq!(derive_label("a-b-c"), "a2b2c");
    }

    #[test]
    fn test_read_manifest_iterates_rows() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("files.tsv");
        fs::write(&manifest, "File\nfirst_1.tsv\n\nsecond_2.tsv\n").unwrap();

        let files = read_manifest(&manifest).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("first_1.tsv"), PathBuf::from("second_2.tsv")]
        );
    }

    #[test]
    fn test_merge_manifest() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("with-cache_run1.tsv");
        let b = dir.path().join("nocache_run1.tsv");
        fs::write(&a, "ID\tCount\n0.5\t10\n1.0\t20.0\n").unwrap();
        fs::write(&b, "ID\tCount\n1.0\t7\n").unwrap();

        let manifest = dir.path().join("files.tsv");
        fs::write(&manifest, format!("File\n{}\n{}\n", a.display(), b.display())).unwrap();

        let (merged, sources) = merge_manifest(&manifest).unwrap();
        assert_eq!(
            merged.rows(),
            &[
                LabeledRow::new("0.5", "with2cache", 10),
                LabeledRow::new("1.0", "with2cache", 20),
                LabeledRow::new("1.0", "nocache", 7),
            ]
        );
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].rows, 2);
        assert_eq!(sources[1].label, "nocache");
    }

    #[test]
    fn test_merge_manifest_missing_count() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("x_1.tsv");
        fs::write(&a, "ID\tValue\n0.5\t10\n").unwrap();
        let manifest = dir.path().join("files.tsv");
        fs::write(&manifest, format!("File\n{}\n", a.display())).unwrap();

        assert!(matches!(
            merge_manifest(&manifest),
            Err(PlotDataError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_merge_empty_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("files.tsv");
        fs::write(&manifest, "File\n").unwrap();

        let (merged, sources) = merge_manifest(&manifest).unwrap();
        assert!(merged.is_empty());
        assert!(sources.is_empty());
    }
}
