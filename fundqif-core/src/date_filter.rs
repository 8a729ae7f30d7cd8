//! Inclusive date-range filter over export price dates.

use chrono::NaiveDate;

use crate::error::ConvertError;

/// Price dates in the export: day.month.year
pub const PRICE_DATE_FORMAT: &str = "%d.%m.%Y";

/// QIF dates: month.day.year
pub const QIF_DATE_FORMAT: &str = "%m.%d.%Y";

const BOUND_DATE_FORMATS: [&str; 2] = [PRICE_DATE_FORMAT, "%Y-%m-%d"];

pub fn parse_price_date(raw: &str) -> Result<NaiveDate, ConvertError> {
    NaiveDate::parse_from_str(raw.trim(), PRICE_DATE_FORMAT)
        .map_err(|_| ConvertError::InvalidDate(raw.to_string()))
}

/// Parse a `--datefrom`/`--dateto` argument. Accepts `dd.mm.yyyy` and `yyyy-mm-dd`.
pub fn parse_bound_date(raw: &str) -> Result<NaiveDate, ConvertError> {
    let trimmed = raw.trim();
    BOUND_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ConvertError::InvalidDate(raw.to_string()))
}

/// Both bounds are inclusive; an unset bound does not restrict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}
