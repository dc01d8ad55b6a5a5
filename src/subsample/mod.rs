//! Uniform subsampling of count sequences and tables.

mod report;
mod uniform;

pub use report::{ReportFormat, SubsampleReport};
pub use uniform::{normalized_ids, subsample_counts, subsample_table, uniform_indices};
