//! QIF serialization: a type header, then one `<tag><value>` line per field and a `^` line
//! closing each record.

use std::io::{self, Write};

use crate::record_builder::OutputRecord;

pub const QIF_HEADER: &str = "!Type:Invst";

const RECORD_END: &str = "^";

pub fn render_record(record: &OutputRecord) -> String {
    let mut out = String::new();
    for (tag, value) in record.fields() {
        out.push(tag);
        out.push_str(&value);
        out.push('\n');
    }
    out.push_str(RECORD_END);
    out.push('\n');
    out
}

/// Write the header and all records, returning the number of records written.
pub fn write_qif<W: Write>(mut out: W, records: &[OutputRecord]) -> io::Result<usize> {
    writeln!(out, "{QIF_HEADER}")?;
    for record in records {
        out.write_all(render_record(record).as_bytes())?;
    }
    out.flush()?;
    Ok(records.len())
}
