//! fundqif-ingest: reading fund-depot transaction exports into typed records.

pub mod encoding;
pub mod parsers;
pub mod types;

pub use parsers::dws_export::{parse_export, read_export_file};
pub use types::{FIELD_COUNT, InputRecord};
