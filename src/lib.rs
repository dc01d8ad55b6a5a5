//! Plot data preparation for frequency/count tables.
//!
//! This library turns raw frequency traces and count tables into the small,
//! evenly sampled, labeled tables a plotting script expects.
//!
//! # Overview
//!
//! - **data**: Core data structures (Table, LabeledTable, SampleSeries)
//! - **extract**: Marker-cell count extraction from `;`-delimited traces
//! - **subsample**: Evenly spaced row selection with normalized IDs
//! - **merge**: Manifest-driven and paired With/Without merges
//!
//! # Example
//!
//! ```no_run
//! use plotprep::prelude::*;
//!
//! let counts = extract_frequencies("trace.log", &ExtractConfig::default()).unwrap();
//! let (series, report) = subsample_counts(&counts, 1000).unwrap();
//! series.to_tsv("trace_1000.tsv").unwrap();
//! println!("{}", report);
//! ```

pub mod data;
pub mod error;
pub mod extract;
pub mod merge;
pub mod subsample;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{
        format_id, parse_count, LabeledRow, LabeledTable, SamplePoint, SampleSeries, Table,
        COUNT_COLUMN, ID_COLUMN,
    };
    pub use crate::error::{PlotDataError, Result};
    pub use crate::extract::{extract_frequencies, extract_from_cells, ExtractConfig};
    pub use crate::merge::{
        derive_label, merge_manifest, merge_paired, merge_paired_files, merge_paired_with_labels,
        read_manifest, MergedSource, PairedLabels,
    };
    pub use crate::subsample::{
        normalized_ids, subsample_counts, subsample_table, uniform_indices, ReportFormat,
        SubsampleReport,
    };
}
