//! Assemble QIF investment records from export records.

use chrono::NaiveDate;
use fundqif_core::date_filter::QIF_DATE_FORMAT;
use fundqif_core::decimal::{self, format_fixed};
use fundqif_core::{ConvertError, TransactionKind, TransactionType, classify};
use fundqif_ingest::InputRecord;

use crate::category_rules::{FundName, Labels, category_or_transfer, fee_split};

/// How the money side of a record is booked: a plain amount (`U`) or a fee category with its
/// split row (`E` + `O`). Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Booking {
    Amount(f64),
    Fee { category: String, split: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub booking: Booking,
    pub currency: String,
    pub price: f64,
    pub quantity: f64,
    pub category_or_transfer: String,
    pub class: String,
}

impl OutputRecord {
    /// Tagged QIF fields in emission order: D V N (U | E O) F I Q L Y.
    pub fn fields(&self) -> Vec<(char, String)> {
        let date = self.date.format(QIF_DATE_FORMAT).to_string();
        let mut fields = vec![
            ('D', date.clone()),
            ('V', date),
            ('N', self.kind.qif_label().to_string()),
        ];
        match &self.booking {
            Booking::Amount(amount) => fields.push(('U', format_fixed(*amount))),
            Booking::Fee { category, split } => {
                fields.push(('E', category.clone()));
                fields.push(('O', split.clone()));
            }
        }
        fields.extend([
            ('F', self.currency.clone()),
            ('I', format_fixed(self.price)),
            ('Q', format_fixed(self.quantity)),
            ('L', self.category_or_transfer.clone()),
            ('Y', self.class.clone()),
        ]);
        fields
    }
}

/// Map one export record (already known to lie within the date filter) to its QIF record.
pub fn build_record(
    input: &InputRecord,
    date: NaiveDate,
    labels: &Labels,
) -> Result<OutputRecord, ConvertError> {
    let ty: TransactionType = input.transaction_type.parse()?;

    // The kind is decided on the signed amount; only afterwards is the sign dropped.
    let signed_amount = decimal::parse_signed(&input.amount);
    let kind = classify(ty, signed_amount);
    let amount = signed_amount.abs();

    let booking = if ty.is_fee() {
        Booking::Fee {
            category: labels.fee_category.clone(),
            split: fee_split(amount),
        }
    } else {
        Booking::Amount(amount)
    };

    let fund = FundName::parse(&input.fund_name);
    Ok(OutputRecord {
        date,
        kind,
        booking,
        currency: input.currency.clone(),
        price: decimal::normalize(&input.share_price),
        quantity: decimal::normalize(&input.share_count),
        category_or_transfer: category_or_transfer(kind, &fund, labels),
        class: fund.class.to_string(),
    })
}
