//! Registered account records
//!
//! Accounts are containers with a CRA-registered type, a balance, and a
//! contribution-room figure tracked against year-to-date contributions.

use serde::{Deserialize, Serialize};

use crate::contributions::remaining_room;
use crate::model::ids::{AccountId, UserId};
use crate::model::transactions::{Transaction, TransactionKind};

/// The six registered account types tracked by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Rrsp,
    Tfsa,
    Rpp,
    Dpsp,
    Fhsa,
    Resp,
}

impl AccountKind {
    pub const ALL: [AccountKind; 6] = [
        AccountKind::Rrsp,
        AccountKind::Tfsa,
        AccountKind::Rpp,
        AccountKind::Dpsp,
        AccountKind::Fhsa,
        AccountKind::Resp,
    ];

    /// Display label and store row string, e.g. `"RRSP"`.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Rrsp => "RRSP",
            AccountKind::Tfsa => "TFSA",
            AccountKind::Rpp => "RPP",
            AccountKind::Dpsp => "DPSP",
            AccountKind::Fhsa => "FHSA",
            AccountKind::Resp => "RESP",
        }
    }

    /// Parse a label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RRSP" => Some(AccountKind::Rrsp),
            "TFSA" => Some(AccountKind::Tfsa),
            "RPP" => Some(AccountKind::Rpp),
            "DPSP" => Some(AccountKind::Dpsp),
            "FHSA" => Some(AccountKind::Fhsa),
            "RESP" => Some(AccountKind::Resp),
            _ => None,
        }
    }

    /// Default contribution room for a newly opened account of this type
    /// (2024 figures; RPP/DPSP/RESP use typical plan amounts).
    pub fn default_contribution_room(&self) -> f64 {
        match self {
            AccountKind::Rrsp => 31_560.0,
            AccountKind::Tfsa => 7_000.0,
            AccountKind::Rpp => 15_000.0,
            AccountKind::Dpsp => 10_000.0,
            AccountKind::Fhsa => 8_000.0,
            AccountKind::Resp => 2_500.0,
        }
    }

    /// Whether contributions to this account type reduce taxable income.
    pub fn is_tax_deductible(&self) -> bool {
        matches!(self, AccountKind::Rrsp | AccountKind::Fhsa)
    }
}

/// A single registered account held at an institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub user_id: UserId,
    pub kind: AccountKind,
    pub institution_name: String,
    /// Masked display number, e.g. `****0042`.
    pub account_number: String,
    pub current_balance: f64,
    pub contribution_room: f64,
    pub ytd_contributions: f64,
}

impl Account {
    /// Masked account number derived from the id, stable across reloads.
    pub fn masked_number(id: AccountId) -> String {
        format!("****{:04}", id.0 % 10_000)
    }

    /// Room left this year: `contribution_room - ytd_contributions`, floored
    /// at zero.
    pub fn remaining_room(&self) -> f64 {
        remaining_room(self.contribution_room, self.ytd_contributions)
    }

    /// Apply a transaction to the balance and year-to-date figures.
    ///
    /// Validation is advisory and happens before this point; `apply` records
    /// whatever the caller decided to keep. Withdrawals and transfers are
    /// outflows.
    pub fn apply(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionKind::Contribution => {
                self.current_balance += transaction.amount;
                self.ytd_contributions += transaction.amount;
            }
            TransactionKind::Withdrawal | TransactionKind::Transfer => {
                self.current_balance -= transaction.amount;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::TransactionId;
    use jiff::civil::date;

    fn test_account(kind: AccountKind) -> Account {
        Account {
            id: AccountId(7),
            user_id: UserId(1),
            kind,
            institution_name: "RBC".to_string(),
            account_number: Account::masked_number(AccountId(7)),
            current_balance: 10_000.0,
            contribution_room: 7_000.0,
            ytd_contributions: 2_000.0,
        }
    }

    fn test_transaction(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId(1),
            user_id: UserId(1),
            account_id: AccountId(7),
            kind,
            amount,
            date: date(2024, 6, 1),
            description: String::new(),
            category: None,
        }
    }

    #[test]
    fn test_kind_parse_round_trip() {
        for kind in AccountKind::ALL {
            assert_eq!(AccountKind::parse(kind.label()), Some(kind));
        }
        assert_eq!(AccountKind::parse("tfsa"), Some(AccountKind::Tfsa));
        assert_eq!(AccountKind::parse("401k"), None);
    }

    #[test]
    fn test_default_rooms() {
        assert_eq!(AccountKind::Rrsp.default_contribution_room(), 31_560.0);
        assert_eq!(AccountKind::Resp.default_contribution_room(), 2_500.0);
    }

    #[test]
    fn test_deductible_kinds() {
        assert!(AccountKind::Rrsp.is_tax_deductible());
        assert!(AccountKind::Fhsa.is_tax_deductible());
        assert!(!AccountKind::Tfsa.is_tax_deductible());
        assert!(!AccountKind::Resp.is_tax_deductible());
    }

    #[test]
    fn test_masked_number() {
        assert_eq!(Account::masked_number(AccountId(42)), "****0042");
        assert_eq!(Account::masked_number(AccountId(123_456)), "****3456");
    }

    #[test]
    fn test_remaining_room() {
        let account = test_account(AccountKind::Tfsa);
        assert_eq!(account.remaining_room(), 5_000.0);
    }

    #[test]
    fn test_apply_contribution() {
        let mut account = test_account(AccountKind::Tfsa);
        account.apply(&test_transaction(TransactionKind::Contribution, 1_500.0));
        assert_eq!(account.current_balance, 11_500.0);
        assert_eq!(account.ytd_contributions, 3_500.0);
        assert_eq!(account.remaining_room(), 3_500.0);
    }

    #[test]
    fn test_apply_withdrawal() {
        let mut account = test_account(AccountKind::Tfsa);
        account.apply(&test_transaction(TransactionKind::Withdrawal, 4_000.0));
        assert_eq!(account.current_balance, 6_000.0);
        // Withdrawals do not restore in-year room
        assert_eq!(account.ytd_contributions, 2_000.0);
    }
}
