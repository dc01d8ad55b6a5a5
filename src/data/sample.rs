//! Subsampled count series with normalized identifiers.

use crate::data::count::format_id;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A selected count with its synthetic x-axis coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Normalized position `(i + 1) / K`.
    pub id: f64,
    pub count: u64,
}

/// The ordered output of subsampling a raw count sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    points: Vec<SamplePoint>,
}

impl SampleSeries {
    pub fn new(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.count).collect()
    }

    /// Write to a tab-delimited file with header `ID\tCount`.
    pub fn to_tsv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        csv_writer.write_record(["ID", "Count"])?;
        for point in &self.points {
            csv_writer.write_record([format_id(point.id), point.count.to_string()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
