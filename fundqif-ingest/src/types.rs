/// Number of `;`-separated attributes on every export line, header included.
pub const FIELD_COUNT: usize = 9;

/// One transaction line of the export, kept verbatim.
///
/// Numbers and dates stay in the export's locale format (`dd.mm.yyyy`, comma decimals);
/// interpreting them is the mapping stage's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    /// 1-based line number in the export
    pub line: u64,
    pub price_date: String,
    pub transaction_type: String,
    /// Either a plain fund name or "<category> / <class>"
    pub fund_name: String,
    pub investment_fund: String,
    pub additional_info: String,
    pub share_count: String,
    pub share_price: String,
    /// Signed; the sign decides the direction of reallocations
    pub amount: String,
    pub currency: String,
}

impl InputRecord {
    /// Build a record from exactly [`FIELD_COUNT`] fields in export column order.
    pub fn from_fields(line: u64, fields: [String; FIELD_COUNT]) -> Self {
        let [
            price_date,
            transaction_type,
            fund_name,
            investment_fund,
            additional_info,
            share_count,
            share_price,
            amount,
            currency,
        ] = fields;
        Self {
            line,
            price_date,
            transaction_type,
            fund_name,
            investment_fund,
            additional_info,
            share_count,
            share_price,
            amount,
            currency,
        }
    }
}
