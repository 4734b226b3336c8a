//! Tests for applying transactions and rolling up the dashboard view

use crate::contributions::{format_currency, validate_contribution};
use crate::model::{
    Account, AccountId, AccountKind, Transaction, TransactionId, TransactionKind, UserId, describe,
};
use crate::summary::PortfolioSummary;
use jiff::civil::date;

fn open_account(id: u32, kind: AccountKind) -> Account {
    Account {
        id: AccountId(id),
        user_id: UserId(1),
        kind,
        institution_name: "Scotiabank".to_string(),
        account_number: Account::masked_number(AccountId(id)),
        current_balance: 0.0,
        contribution_room: kind.default_contribution_room(),
        ytd_contributions: 0.0,
    }
}

fn contribution(id: u32, account: &Account, amount: f64) -> Transaction {
    Transaction {
        id: TransactionId(id),
        user_id: account.user_id,
        account_id: account.id,
        kind: TransactionKind::Contribution,
        amount,
        date: date(2024, 6, 1),
        description: describe(TransactionKind::Contribution, account.kind, amount),
        category: None,
    }
}

#[test]
fn test_contribution_flow_updates_dashboard() {
    let mut rrsp = open_account(1, AccountKind::Rrsp);
    let mut tfsa = open_account(2, AccountKind::Tfsa);

    let tx1 = contribution(1, &rrsp, 10_000.0);
    assert!(validate_contribution(tx1.amount, rrsp.remaining_room()).is_valid());
    rrsp.apply(&tx1);

    let tx2 = contribution(2, &tfsa, 2_000.0);
    assert!(validate_contribution(tx2.amount, tfsa.remaining_room()).is_valid());
    tfsa.apply(&tx2);

    let summary = PortfolioSummary::from_accounts(&[rrsp.clone(), tfsa.clone()]);
    assert_eq!(summary.total_balance, 12_000.0);
    assert_eq!(summary.total_contributions, 12_000.0);
    assert_eq!(summary.total_room, 38_560.0);
    assert_eq!(summary.remaining_room, 26_560.0);

    assert_eq!(rrsp.remaining_room(), 21_560.0);
    assert_eq!(tfsa.remaining_room(), 5_000.0);
}

#[test]
fn test_over_room_contribution_is_flagged_but_can_be_applied() {
    let mut tfsa = open_account(1, AccountKind::Tfsa);
    let tx = contribution(1, &tfsa, 8_500.0);

    let check = validate_contribution(tx.amount, tfsa.remaining_room());
    assert!(!check.is_valid());
    assert!(check.message().unwrap().contains("$1,500.00"));

    // Validation is advisory; a forced application still lands
    tfsa.apply(&tx);
    assert_eq!(tfsa.current_balance, 8_500.0);
    assert_eq!(tfsa.remaining_room(), 0.0);

    let summary = PortfolioSummary::from_accounts(&[tfsa]);
    assert_eq!(summary.remaining_room, -1_500.0);
    assert_eq!(format_currency(summary.remaining_room), "-$1,500.00");
}

#[test]
fn test_withdrawal_does_not_restore_room() {
    let mut tfsa = open_account(1, AccountKind::Tfsa);
    tfsa.apply(&contribution(1, &tfsa, 6_000.0));

    let withdrawal = Transaction {
        kind: TransactionKind::Withdrawal,
        description: describe(TransactionKind::Withdrawal, tfsa.kind, 1_000.0),
        ..contribution(2, &tfsa, 1_000.0)
    };
    tfsa.apply(&withdrawal);

    assert_eq!(tfsa.current_balance, 5_000.0);
    assert_eq!(tfsa.ytd_contributions, 6_000.0);
    assert_eq!(tfsa.remaining_room(), 1_000.0);
}
