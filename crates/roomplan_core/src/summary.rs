//! Portfolio roll-up across a user's accounts

use serde::{Deserialize, Serialize};

use crate::model::{Account, AccountKind};

/// Dashboard totals computed from a set of accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_balance: f64,
    pub total_contributions: f64,
    pub total_room: f64,
    /// `total_room - total_contributions`, not floored — a negative figure
    /// means contributions exceed tracked room.
    pub remaining_room: f64,
    /// Balance per account type, in declaration order, for the types present.
    pub by_kind: Vec<(AccountKind, f64)>,
}

impl PortfolioSummary {
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let total_balance = accounts.iter().map(|a| a.current_balance).sum();
        let total_contributions = accounts.iter().map(|a| a.ytd_contributions).sum::<f64>();
        let total_room = accounts.iter().map(|a| a.contribution_room).sum::<f64>();

        let by_kind = AccountKind::ALL
            .iter()
            .filter_map(|kind| {
                let balance: f64 = accounts
                    .iter()
                    .filter(|a| a.kind == *kind)
                    .map(|a| a.current_balance)
                    .sum();
                accounts
                    .iter()
                    .any(|a| a.kind == *kind)
                    .then_some((*kind, balance))
            })
            .collect();

        PortfolioSummary {
            total_balance,
            total_contributions,
            total_room,
            remaining_room: total_room - total_contributions,
            by_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountId, UserId};

    fn account(id: u32, kind: AccountKind, balance: f64, room: f64, ytd: f64) -> Account {
        Account {
            id: AccountId(id),
            user_id: UserId(1),
            kind,
            institution_name: "TD".to_string(),
            account_number: Account::masked_number(AccountId(id)),
            current_balance: balance,
            contribution_room: room,
            ytd_contributions: ytd,
        }
    }

    #[test]
    fn test_summary_totals() {
        let accounts = vec![
            account(1, AccountKind::Rrsp, 50_000.0, 31_560.0, 10_000.0),
            account(2, AccountKind::Tfsa, 20_000.0, 7_000.0, 2_000.0),
            account(3, AccountKind::Tfsa, 5_000.0, 0.0, 0.0),
        ];
        let summary = PortfolioSummary::from_accounts(&accounts);

        assert_eq!(summary.total_balance, 75_000.0);
        assert_eq!(summary.total_contributions, 12_000.0);
        assert_eq!(summary.total_room, 38_560.0);
        assert_eq!(summary.remaining_room, 26_560.0);
        assert_eq!(
            summary.by_kind,
            vec![(AccountKind::Rrsp, 50_000.0), (AccountKind::Tfsa, 25_000.0)]
        );
    }

    #[test]
    fn test_summary_empty() {
        let summary = PortfolioSummary::from_accounts(&[]);
        assert_eq!(summary.total_balance, 0.0);
        assert_eq!(summary.remaining_room, 0.0);
        assert!(summary.by_kind.is_empty());
    }

    #[test]
    fn test_summary_over_contributed_goes_negative() {
        let accounts = vec![account(1, AccountKind::Tfsa, 9_000.0, 7_000.0, 8_000.0)];
        let summary = PortfolioSummary::from_accounts(&accounts);
        assert_eq!(summary.remaining_room, -1_000.0);
    }
}
