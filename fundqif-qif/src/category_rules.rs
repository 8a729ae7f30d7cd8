//! Deterministic category rules: which ledger category a booking lands in, how the fund name
//! splits into category and class, and the fee split row for fee-type transactions.

use fundqif_core::TransactionKind;
use fundqif_core::decimal::format_fixed;
use serde::{Deserialize, Serialize};

/// Number of columns in a fee split row.
pub const FEE_SPLIT_COLUMNS: usize = 12;

/// 0-based column of the fee amount within the split row.
pub const FEE_SPLIT_AMOUNT_COLUMN: usize = 7;

/// Ledger category names. Defaults match a German-language finance manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// `L` category of sells
    pub realized_gains: String,
    /// `L` category of reinvestments
    pub other_income: String,
    /// `E` category of fee bookings
    pub fee_category: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            realized_gains: "Kursgewinne:Realisierte Gewinne".to_string(),
            other_income: "Kapitalerträge:sonstige Einnahme".to_string(),
            fee_category: "Depotkosten:Depotgebühren".to_string(),
        }
    }
}

/// A fund name split at its `/` into an optional category prefix and the class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundName<'a> {
    pub category: Option<&'a str>,
    pub class: &'a str,
}

impl<'a> FundName<'a> {
    /// "Global Fund / A" -> category "Global Fund", class "A".
    /// Without a `/` the whole trimmed name is the class.
    ///
    /// Only the segment right after the first `/` becomes the class; trailing slashes count
    /// as absent.
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.trim_end_matches('/').split('/');
        let head = parts.next().unwrap_or_default().trim();
        match parts.next() {
            Some(class) => Self {
                category: Some(head),
                class: class.trim(),
            },
            None => Self {
                category: None,
                class: head,
            },
        }
    }
}

/// Base category of the `L` line before any fund category suffix.
pub fn base_category(kind: TransactionKind, labels: &Labels) -> &str {
    match kind {
        TransactionKind::Sell => &labels.realized_gains,
        TransactionKind::ReinvestShares => &labels.other_income,
        TransactionKind::Buy => "",
    }
}

/// Full `L` line value: base category, then `|[<fund category>]` when the fund name has one.
pub fn category_or_transfer(kind: TransactionKind, fund: &FundName<'_>, labels: &Labels) -> String {
    let mut value = base_category(kind, labels).to_string();
    if let Some(category) = fund.category {
        value.push_str("|[");
        value.push_str(category);
        value.push(']');
    }
    value
}

/// Split row with the (already absolute) fee in column 8 and zero everywhere else.
pub fn fee_split(fee: f64) -> String {
    let amount = format_fixed(fee);
    let zero = format_fixed(0.0);
    (0..FEE_SPLIT_COLUMNS)
        .map(|col| {
            if col == FEE_SPLIT_AMOUNT_COLUMN {
                amount.as_str()
            } else {
                zero.as_str()
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}
