//! Transaction records against registered accounts

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::contributions::format_currency;
use crate::model::accounts::AccountKind;
use crate::model::ids::{AccountId, TransactionId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Contribution,
    Withdrawal,
    Transfer,
}

impl TransactionKind {
    /// Row string used by the store, e.g. `"contribution"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Contribution => "contribution",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "contribution" => Some(TransactionKind::Contribution),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            "transfer" => Some(TransactionKind::Transfer),
            _ => None,
        }
    }
}

/// A dated movement of money against one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub account_id: AccountId,
    pub kind: TransactionKind,
    /// Always positive; the kind decides the direction.
    pub amount: f64,
    pub date: Date,
    pub description: String,
    pub category: Option<String>,
}

/// Auto-generated description when the user does not supply one,
/// e.g. `RRSP contribution of $1,000.00`.
pub fn describe(kind: TransactionKind, account_kind: AccountKind, amount: f64) -> String {
    let amount = format_currency(amount);
    let verb = match kind {
        TransactionKind::Contribution => "contribution",
        TransactionKind::Withdrawal => "withdrawal",
        TransactionKind::Transfer => "transfer",
    };
    format!("{} {verb} of {amount}", account_kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            TransactionKind::Contribution,
            TransactionKind::Withdrawal,
            TransactionKind::Transfer,
        ] {
            assert_eq!(TransactionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(TransactionKind::parse("deposit"), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(TransactionKind::Contribution, AccountKind::Rrsp, 1_000.0),
            "RRSP contribution of $1,000.00"
        );
        assert_eq!(
            describe(TransactionKind::Withdrawal, AccountKind::Tfsa, 250.5),
            "TFSA withdrawal of $250.50"
        );
    }
}
