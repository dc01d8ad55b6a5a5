//! Tabular data structures and their delimited-text I/O.

mod count;
mod labeled;
mod sample;
mod table;

pub use count::{format_id, parse_count, parse_integer_count};
pub use labeled::{LabeledRow, LabeledTable, LABELED_HEADER};
pub use sample::{SamplePoint, SampleSeries};
pub use table::{Table, COUNT_COLUMN, ID_COLUMN};
