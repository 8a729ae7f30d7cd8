//! fundqif-core: transaction kinds, classification rules, decimal normalization and date filtering
//! for converting fund-depot exports into QIF investment ledgers.

pub mod date_filter;
pub mod decimal;
pub mod error;
pub mod transaction;

pub use date_filter::{DateFilter, parse_bound_date, parse_price_date};
pub use error::ConvertError;
pub use transaction::{TransactionKind, TransactionType, classify};
