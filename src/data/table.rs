//! In-memory tab-delimited table with typed column access.

use crate::data::count::parse_count;
use crate::error::{PlotDataError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Name of the identifier column.
pub const ID_COLUMN: &str = "ID";
/// Name of the count column.
pub const COUNT_COLUMN: &str = "Count";

/// An ordered sequence of rows sharing one header.
///
/// Cells are kept as text so that columns this crate does not interpret are
/// written back exactly as they were read. Numeric access goes through
/// [`Table::count_at`] and [`Table::counts`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, in file order.
    headers: Vec<String>,
    /// Row cells; every row has `headers.len()` cells.
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table, checking that every row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some(bad) = rows.iter().find(|row| row.len() != headers.len()) {
            return Err(PlotDataError::DimensionMismatch {
                expected: headers.len(),
                actual: bad.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    /// Load a table from a tab-delimited file with a header row.
    pub fn from_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a table from any tab-delimited source with a header row.
    ///
    /// Blank lines are skipped. A source with no header is an error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(PlotDataError::EmptyData("Table has no header row".to_string()));
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Self::new(headers, rows)
    }

    /// Write the table to a tab-delimited file.
    pub fn to_tsv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    /// Write the table, header first, to any sink.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Column names.
    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PlotDataError::MissingColumn(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Raw text of a cell.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// Parse a cell as a count.
    pub fn count_at(&self, row: usize, col: usize) -> Result<u64> {
        parse_count(&self.rows[row][col], row, &self.headers[col])
    }

    /// Parse every cell of a named column as a count.
    pub fn counts(&self, name: &str) -> Result<Vec<u64>> {
        let col = self.column_index(name)?;
        (0..self.n_rows()).map(|row| self.count_at(row, col)).collect()
    }

    /// Build a new table from the given row indices, in the given order.
    ///
    /// Repeated indices produce repeated rows.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self> {
        let mut rows = Vec::with_capacity(indices.len());
        for &idx in indices {
            let row = self.rows.get(idx).ok_or_else(|| {
                PlotDataError::InvalidParameter(format!("Row index {} out of bounds", idx))
            })?;
            rows.push(row.clone());
        }
        Ok(Self {
            headers: self.headers.clone(),
            rows,
        })
    }

    /// Replace the values of a named column, appending the column if absent.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.n_rows() {
            return Err(PlotDataError::DimensionMismatch {
                expected: self.n_rows(),
                actual: values.len(),
            });
        }

        match self.column_index(name) {
            Ok(col) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[col] = value;
                }
            }
            Err(_) => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}
