//! Tolerant tabular readers
//!
//! Both readers open the file eagerly, so a missing input fails before any
//! row is produced, then decode lazily. Records that do not fit the row
//! type are dropped and counted rather than failing the read.

pub mod ndjson;
pub mod tsv;

pub use ndjson::{read_ndjson, NdjsonRows};
pub use tsv::{read_tsv, TsvOptions, TsvRows};
