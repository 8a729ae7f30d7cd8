//! DWS depot transaction export parser
//!
//! Expected layout (ISO-8859-1, one header line, `;` separated, no quoting):
//!   Preistag;Umsatzart;Fondsname;Investmentfonds;Zusatzinformation;Anteile;Preis;Betrag;Währung
//!   01.03.2020;Beitrag;Global Fund / A;X;;10,000;5,50;55,00;EUR

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use fundqif_core::ConvertError;
use log::debug;

use crate::encoding::decode_latin1;
use crate::types::{FIELD_COUNT, InputRecord};

/// Parse an export into its data records.
///
/// Blank lines are skipped. Every other line must carry exactly [`FIELD_COUNT`] attributes,
/// not counting empty trailing ones; the first such line is the header and is dropped whatever
/// it contains.
pub fn parse_export(reader: impl Read) -> Result<Vec<InputRecord>, ConvertError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut raw = csv::ByteRecord::new();
    let mut header_seen = false;
    let mut records = Vec::new();

    while rdr.read_byte_record(&mut raw).map_err(io::Error::from)? {
        let line = raw.position().map(|pos| pos.line()).unwrap_or_default();
        let found = attribute_count(&raw);
        if found != FIELD_COUNT {
            return Err(ConvertError::AttributeCount {
                line,
                expected: FIELD_COUNT,
                found,
            });
        }

        let fields: [String; FIELD_COUNT] = std::array::from_fn(|i| decode_latin1(&raw[i]));
        if !header_seen {
            header_seen = true;
            debug!("line {line}: header {fields:?}");
            continue;
        }

        let record = InputRecord::from_fields(line, fields);
        debug!("line {line}: {record:?}");
        records.push(record);
    }

    Ok(records)
}

/// Attributes up to the last non-empty one. `a;b;` has 2, `a;;b` has 3.
fn attribute_count(raw: &csv::ByteRecord) -> usize {
    raw.iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1)
}

pub fn read_export_file(path: impl AsRef<Path>) -> Result<Vec<InputRecord>, ConvertError> {
    parse_export(File::open(path.as_ref())?)
}
