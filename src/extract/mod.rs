//! Count extraction from raw delimited trace files.

mod frequency;

pub use frequency::{
    extract_frequencies, extract_frequencies_from_reader, extract_from_cells, ExtractConfig,
};
