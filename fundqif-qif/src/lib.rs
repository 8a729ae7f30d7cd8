//! fundqif-qif: category rules, QIF record assembly and serialization, and the conversion
//! pipeline tying them to parsed export records.

pub mod category_rules;
pub mod pipeline;
pub mod record_builder;
pub mod writer;

pub use category_rules::{FundName, Labels};
pub use pipeline::{Conversion, convert};
pub use record_builder::{Booking, OutputRecord, build_record};
pub use writer::{QIF_HEADER, render_record, write_qif};
