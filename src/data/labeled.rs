//! Labeled rows produced by the merge procedures.

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header written for every labeled table.
pub const LABELED_HEADER: [&str; 3] = ["ID", "Type", "Count"];

/// One row of a merged table: identifier, source label and count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow {
    /// Identifier text, carried through from the input unchanged.
    pub id: String,
    /// Dataset tag shown in the plot legend.
    pub label: String,
    pub count: u64,
}

impl LabeledRow {
    pub fn new(id: impl Into<String>, label: impl Into<String>, count: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count,
        }
    }
}

/// An ordered collection of labeled rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledTable {
    rows: Vec<LabeledRow>,
}

impl LabeledTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: LabeledRow) {
        self.rows.push(row);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> &[LabeledRow] {
        &self.rows
    }

    /// Number of rows carrying the given label.
    pub fn count_label(&self, label: &str) -> usize {
        self.rows.iter().filter(|r| r.label == label).count()
    }

    /// Write to a tab-delimited file with header `ID\tType\tCount`.
    pub fn to_tsv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        csv_writer.write_record(LABELED_HEADER)?;
        for row in &self.rows {
            let count = row.count.to_string();
            csv_writer.write_record([row.id.as_str(), row.label.as_str(), count.as_str()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl Extend<LabeledRow> for LabeledTable {
    fn extend<I: IntoIterator<Item = LabeledRow>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl FromIterator<LabeledRow> for LabeledTable {
    fn from_iter<I: IntoIterator<Item = LabeledRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_header_and_rows() {
        let table: LabeledTable = vec![
            LabeledRow::new("0.5", "With", 10),
            LabeledRow::new("0.5", "Without", 20),
        ]
        .into_iter()
        .collect();

        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "ID\tType\tCount\n0.5\tWith\t10\n0.5\tWithout\t20\n");
    }

    #[test]
    fn test_empty_table_writes_header() {
        let mut buf = Vec::new();
        LabeledTable::new().write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ID\tType\tCount\n");
    }

    #[test]
    fn test_count_label() {
        let mut table = LabeledTable::with_capacity(3);
        table.push(LabeledRow::new("1", "a", 1));
        table.extend([LabeledRow::new("2", "b", 2), LabeledRow::new("3", "a", 3)]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.count_label("a"), 2);
        assert_eq!(table.count_label("c"), 0);
    }
}
