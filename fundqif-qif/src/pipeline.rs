//! Conversion pipeline: date filter, then classification and record assembly.
//!
//! Counters live in the returned [`Conversion`]; nothing is shared between runs.

use fundqif_core::{ConvertError, DateFilter, parse_price_date};
use fundqif_ingest::InputRecord;
use log::{debug, info};

use crate::category_rules::Labels;
use crate::record_builder::{OutputRecord, build_record};

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub records: Vec<OutputRecord>,
    /// Data records read, header excluded, filtered ones included.
    pub read: usize,
    /// Records dropped by the date filter.
    pub skipped: usize,
}

/// Convert export records into QIF records.
///
/// Every price date must parse, even without a filter. Records outside the filter are dropped
/// before their transaction type is looked at. The first invalid record aborts the whole
/// conversion.
pub fn convert(
    inputs: &[InputRecord],
    filter: &DateFilter,
    labels: &Labels,
) -> Result<Conversion, ConvertError> {
    let mut records = Vec::with_capacity(inputs.len());
    let mut skipped = 0;

    for input in inputs {
        let date = parse_price_date(&input.price_date)?;
        if !filter.contains(date) {
            debug!("line {}: {} outside date filter, skipped", input.line, date);
            skipped += 1;
            continue;
        }

        let record = build_record(input, date, labels)?;
        debug!("line {}: {:?}", input.line, record);
        records.push(record);
    }

    info!(
        "mapped {} of {} records ({} outside date filter)",
        records.len(),
        inputs.len(),
        skipped
    );

    Ok(Conversion {
        records,
        read: inputs.len(),
        skipped,
    })
}
