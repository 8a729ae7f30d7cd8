//! Closed vocabulary of export transaction types and their mapping onto QIF investment actions.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Transaction type label as it appears in the export's second column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// "Beitrag"
    Contribution,
    /// "Umschichtung": direction depends on the sign of the amount
    Reallocation,
    /// "Depotentgelt"
    CustodyFee,
    /// "Verwaltungskosten d. Vertrages"
    ContractAdministrationCosts,
    /// "Verkauf wegen Depotentgelt"
    SaleForCustodyFee,
    /// "Rueckforderung Zulage"
    AllowanceReclaim,
    /// "Gutschrift Zulage"
    AllowanceCredit,
    /// "Gutschrift Kinderzulage"
    ChildAllowanceCredit,
    /// "Kauf VL zum Ausgabepreis"
    CapitalFormingPurchase,
    /// "Wiederanlage der Ausschuettung"
    DistributionReinvestment,
    /// "Wiederanlage von Ertragsteuer"
    IncomeTaxReinvestment,
}

impl TransactionType {
    pub const ALL: [TransactionType; 11] = [
        TransactionType::Contribution,
        TransactionType::Reallocation,
        TransactionType::CustodyFee,
        TransactionType::ContractAdministrationCosts,
        TransactionType::SaleForCustodyFee,
        TransactionType::AllowanceReclaim,
        TransactionType::AllowanceCredit,
        TransactionType::ChildAllowanceCredit,
        TransactionType::CapitalFormingPurchase,
        TransactionType::DistributionReinvestment,
        TransactionType::IncomeTaxReinvestment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Contribution => "Beitrag",
            TransactionType::Reallocation => "Umschichtung",
            TransactionType::CustodyFee => "Depotentgelt",
            TransactionType::ContractAdministrationCosts => "Verwaltungskosten d. Vertrages",
            TransactionType::SaleForCustodyFee => "Verkauf wegen Depotentgelt",
            TransactionType::AllowanceReclaim => "Rueckforderung Zulage",
            TransactionType::AllowanceCredit => "Gutschrift Zulage",
            TransactionType::ChildAllowanceCredit => "Gutschrift Kinderzulage",
            TransactionType::CapitalFormingPurchase => "Kauf VL zum Ausgabepreis",
            TransactionType::DistributionReinvestment => "Wiederanlage der Ausschuettung",
            TransactionType::IncomeTaxReinvestment => "Wiederanlage von Ertragsteuer",
        }
    }

    /// Fee-type transactions are booked as a fee split instead of a plain amount.
    pub fn is_fee(self) -> bool {
        matches!(
            self,
            TransactionType::CustodyFee
                | TransactionType::ContractAdministrationCosts
                | TransactionType::SaleForCustodyFee
        )
    }
}

impl FromStr for TransactionType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|ty| ty.label() == s)
            .ok_or_else(|| ConvertError::UnknownTransaction(s.to_string()))
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// QIF investment action written to the `N` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Buy,
    Sell,
    ReinvestShares,
}

impl TransactionKind {
    pub fn qif_label(self) -> &'static str {
        match self {
            TransactionKind::Buy => "Kauf",
            TransactionKind::Sell => "Verkauf",
            TransactionKind::ReinvestShares => "Retshrs",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qif_label())
    }
}

/// Map a transaction type onto its QIF action.
///
/// `signed_amount` must be the amount as exported, before any absolute-value normalization:
/// a reallocation is a buy only when it is strictly positive.
pub fn classify(ty: TransactionType, signed_amount: f64) -> TransactionKind {
    match ty {
        TransactionType::Reallocation if signed_amount > 0.0 => TransactionKind::Buy,
        TransactionType::Reallocation => TransactionKind::Sell,
        TransactionType::Contribution
        | TransactionType::AllowanceCredit
        | TransactionType::ChildAllowanceCredit
        | TransactionType::CapitalFormingPurchase => TransactionKind::Buy,
        TransactionType::CustodyFee
        | TransactionType::ContractAdministrationCosts
        | TransactionType::SaleForCustodyFee
        | TransactionType::AllowanceReclaim => TransactionKind::Sell,
        TransactionType::DistributionReinvestment | TransactionType::IncomeTaxReinvestment => {
            TransactionKind::ReinvestShares
        }
    }
}
