//! Merging of count tables into one labeled table for plotting.

mod manifest;
mod paired;

pub use manifest::{derive_label, merge_manifest, read_manifest, MergedSource};
pub use paired::{merge_paired, merge_paired_files, merge_paired_with_labels, PairedLabels};
