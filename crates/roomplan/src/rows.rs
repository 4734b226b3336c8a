//! Persisted row records and row/domain mapping pairs
//!
//! Rows are the snake_case JSON shape written to `ledger.json`. Every entity
//! has a `*_to_row` / `row_to_*` pair; the row side keeps ids as bare
//! integers, dates as ISO strings, and enums as lowercase/label strings, so
//! the on-disk document stays readable and diffable. Contribution limits are
//! a typed nested document, never an untyped map.

use serde::{Deserialize, Serialize};

use roomplan_core::dates::parse_date;
use roomplan_core::model::{
    Account, AccountId, AccountKind, ContributionLimits, Couple, CoupleId, Goal, GoalId, Priority,
    RelationshipStatus, Transaction, TransactionId, TransactionKind, User, UserId,
};

use crate::store::StoreError;

/// The whole persisted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub counters: IdCounters,
    #[serde(default)]
    pub users: Vec<UserRow>,
    #[serde(default)]
    pub couples: Vec<CoupleRow>,
    #[serde(default)]
    pub accounts: Vec<AccountRow>,
    #[serde(default)]
    pub transactions: Vec<TransactionRow>,
    #[serde(default)]
    pub goals: Vec<GoalRow>,
}

/// Last id handed out per entity; persisted so ids stay unique across runs
/// even after deletions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IdCounters {
    pub user: u32,
    pub couple: u32,
    pub account: u32,
    pub transaction: u32,
    pub goal: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub province: String,
    pub relationship_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub couple_id: Option<u32>,
    pub contribution_limits: ContributionLimits,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoupleRow {
    pub id: u32,
    pub partner1_id: u32,
    pub partner2_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRow {
    pub id: u32,
    pub user_id: u32,
    pub kind: String,
    pub institution_name: String,
    pub account_number: String,
    pub current_balance: f64,
    pub contribution_room: f64,
    pub year_to_date_contributions: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: u32,
    pub user_id: u32,
    pub account_id: u32,
    pub kind: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRow {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    pub account_kinds: Vec<String>,
    pub priority: String,
    pub is_shared: bool,
}

fn parse_row_date(field: &str, value: &str) -> Result<jiff::civil::Date, StoreError> {
    parse_date(value).ok_or_else(|| StoreError::Parse(format!("invalid {field} '{value}'")))
}

fn parse_optional_date(
    field: &str,
    value: &Option<String>,
) -> Result<Option<jiff::civil::Date>, StoreError> {
    value
        .as_deref()
        .map(|s| parse_row_date(field, s))
        .transpose()
}

pub fn user_to_row(user: &User) -> UserRow {
    UserRow {
        id: user.id.0,
        name: user.name.clone(),
        email: user.email.clone(),
        date_of_birth: user.date_of_birth.map(|d| d.to_string()),
        province: user.province.clone(),
        relationship_status: user.relationship_status.as_str().to_string(),
        couple_id: user.couple_id.map(|id| id.0),
        contribution_limits: user.limits,
        is_primary: user.is_primary,
    }
}

pub fn row_to_user(row: &UserRow) -> Result<User, StoreError> {
    let relationship_status = RelationshipStatus::parse(&row.relationship_status).ok_or_else(|| {
        StoreError::Parse(format!(
            "unknown relationship status '{}'",
            row.relationship_status
        ))
    })?;

    Ok(User {
        id: UserId(row.id),
        name: row.name.clone(),
        email: row.email.clone(),
        date_of_birth: parse_optional_date("date of birth", &row.date_of_birth)?,
        province: row.province.clone(),
        relationship_status,
        couple_id: row.couple_id.map(CoupleId),
        limits: row.contribution_limits,
        is_primary: row.is_primary,
    })
}

pub fn couple_to_row(couple: &Couple) -> CoupleRow {
    CoupleRow {
        id: couple.id.0,
        partner1_id: couple.partner1.0,
        partner2_id: couple.partner2.0,
        marriage_date: couple.marriage_date.map(|d| d.to_string()),
    }
}

pub fn row_to_couple(row: &CoupleRow) -> Result<Couple, StoreError> {
    Ok(Couple {
        id: CoupleId(row.id),
        partner1: UserId(row.partner1_id),
        partner2: UserId(row.partner2_id),
        marriage_date: parse_optional_date("marriage date", &row.marriage_date)?,
    })
}

pub fn account_to_row(account: &Account) -> AccountRow {
    AccountRow {
        id: account.id.0,
        user_id: account.user_id.0,
        kind: account.kind.label().to_string(),
        institution_name: account.institution_name.clone(),
        account_number: account.account_number.clone(),
        current_balance: account.current_balance,
        contribution_room: account.contribution_room,
        year_to_date_contributions: account.ytd_contributions,
    }
}

pub fn row_to_account(row: &AccountRow) -> Result<Account, StoreError> {
    let kind = AccountKind::parse(&row.kind)
        .ok_or_else(|| StoreError::Parse(format!("unknown account type '{}'", row.kind)))?;

    Ok(Account {
        id: AccountId(row.id),
        user_id: UserId(row.user_id),
        kind,
        institution_name: row.institution_name.clone(),
        account_number: row.account_number.clone(),
        current_balance: row.current_balance,
        contribution_room: row.contribution_room,
        ytd_contributions: row.year_to_date_contributions,
    })
}

pub fn transaction_to_row(transaction: &Transaction) -> TransactionRow {
    TransactionRow {
        id: transaction.id.0,
        user_id: transaction.user_id.0,
        account_id: transaction.account_id.0,
        kind: transaction.kind.as_str().to_string(),
        amount: transaction.amount,
        date: transaction.date.to_string(),
        description: transaction.description.clone(),
        category: transaction.category.clone(),
    }
}

pub fn row_to_transaction(row: &TransactionRow) -> Result<Transaction, StoreError> {
    let kind = TransactionKind::parse(&row.kind)
        .ok_or_else(|| StoreError::Parse(format!("unknown transaction type '{}'", row.kind)))?;

    Ok(Transaction {
        id: TransactionId(row.id),
        user_id: UserId(row.user_id),
        account_id: AccountId(row.account_id),
        kind,
        amount: row.amount,
        date: parse_row_date("transaction date", &row.date)?,
        description: row.description.clone(),
        category: row.category.clone(),
    })
}

pub fn goal_to_row(goal: &Goal) -> GoalRow {
    GoalRow {
        id: goal.id.0,
        user_id: goal.user_id.0,
        title: goal.title.clone(),
        target_amount: goal.target_amount,
        current_amount: goal.current_amount,
        target_date: goal.target_date.map(|d| d.to_string()),
        account_kinds: goal
            .account_kinds
            .iter()
            .map(|k| k.label().to_string())
            .collect(),
        priority: goal.priority.as_str().to_string(),
        is_shared: goal.is_shared,
    }
}

pub fn row_to_goal(row: &GoalRow) -> Result<Goal, StoreError> {
    let priority = Priority::parse(&row.priority)
        .ok_or_else(|| StoreError::Parse(format!("unknown priority '{}'", row.priority)))?;

    let account_kinds = row
        .account_kinds
        .iter()
        .map(|s| {
            AccountKind::parse(s)
                .ok_or_else(|| StoreError::Parse(format!("unknown account type '{s}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Goal {
        id: GoalId(row.id),
        user_id: UserId(row.user_id),
        title: row.title.clone(),
        target_amount: row.target_amount,
        current_amount: row.current_amount,
        target_date: parse_optional_date("target date", &row.target_date)?,
        account_kinds,
        priority,
        is_shared: row.is_shared,
    })
}

impl IdCounters {
    pub fn next_user(&mut self) -> u32 {
        self.user += 1;
        self.user
    }

    pub fn next_couple(&mut self) -> u32 {
        self.couple += 1;
        self.couple
    }

    pub fn next_account(&mut self) -> u32 {
        self.account += 1;
        self.account
    }

    pub fn next_transaction(&mut self) -> u32 {
        self.transaction += 1;
        self.transaction
    }

    pub fn next_goal(&mut self) -> u32 {
        self.goal += 1;
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use roomplan_core::model::FhsaLimits;

    fn sample_user() -> User {
        let mut limits = ContributionLimits::default();
        limits.fhsa = Some(FhsaLimits::default());
        User {
            id: UserId(3),
            name: "Morgan".to_string(),
            email: "morgan@example.com".to_string(),
            date_of_birth: Some(date(1988, 11, 2)),
            province: "British Columbia".to_string(),
            relationship_status: RelationshipStatus::CommonLaw,
            couple_id: Some(CoupleId(1)),
            limits,
            is_primary: true,
        }
    }

    #[test]
    fn test_user_row_round_trip() {
        let user = sample_user();
        let row = user_to_row(&user);
        assert_eq!(row.relationship_status, "common-law");
        assert_eq!(row.date_of_birth.as_deref(), Some("1988-11-02"));

        let back = row_to_user(&row).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_row_bad_status() {
        let mut row = user_to_row(&sample_user());
        row.relationship_status = "divorced".to_string();
        assert!(matches!(row_to_user(&row), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_account_row_round_trip() {
        let account = Account {
            id: AccountId(9),
            user_id: UserId(3),
            kind: AccountKind::Fhsa,
            institution_name: "BMO".to_string(),
            account_number: "****0009".to_string(),
            current_balance: 12_500.0,
            contribution_room: 8_000.0,
            ytd_contributions: 3_000.0,
        };
        let row = account_to_row(&account);
        assert_eq!(row.kind, "FHSA");
        assert_eq!(row.year_to_date_contributions, 3_000.0);
        assert_eq!(row_to_account(&row).unwrap(), account);
    }

    #[test]
    fn test_transaction_row_round_trip() {
        let transaction = Transaction {
            id: TransactionId(14),
            user_id: UserId(3),
            account_id: AccountId(9),
            kind: TransactionKind::Withdrawal,
            amount: 750.0,
            date: date(2024, 2, 29),
            description: "FHSA withdrawal of $750.00".to_string(),
            category: Some("housing".to_string()),
        };
        let row = transaction_to_row(&transaction);
        assert_eq!(row.kind, "withdrawal");
        assert_eq!(row.date, "2024-02-29");
        assert_eq!(row_to_transaction(&row).unwrap(), transaction);
    }

    #[test]
    fn test_transaction_row_bad_date() {
        let mut row = TransactionRow {
            id: 1,
            user_id: 1,
            account_id: 1,
            kind: "contribution".to_string(),
            amount: 100.0,
            date: "2024-02-30".to_string(),
            description: String::new(),
            category: None,
        };
        assert!(matches!(
            row_to_transaction(&row),
            Err(StoreError::Parse(_))
        ));

        row.date = "2024-02-28".to_string();
        assert!(row_to_transaction(&row).is_ok());
    }

    #[test]
    fn test_goal_row_round_trip() {
        let goal = Goal {
            id: GoalId(2),
            user_id: UserId(3),
            title: "Down payment".to_string(),
            target_amount: 60_000.0,
            current_amount: 15_000.0,
            target_date: Some(date(2027, 1, 1)),
            account_kinds: vec![AccountKind::Fhsa, AccountKind::Tfsa],
            priority: Priority::High,
            is_shared: true,
        };
        let row = goal_to_row(&goal);
        assert_eq!(row.account_kinds, vec!["FHSA", "TFSA"]);
        assert_eq!(row_to_goal(&row).unwrap(), goal);
    }

    #[test]
    fn test_ledger_json_shape_is_snake_case() {
        let ledger = Ledger {
            users: vec![user_to_row(&sample_user())],
            ..Default::default()
        };
        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.contains("\"relationship_status\":\"common-law\""));
        assert!(json.contains("\"date_of_birth\":\"1988-11-02\""));
        assert!(json.contains("\"contribution_limits\""));
    }

    #[test]
    fn test_id_counters_monotonic() {
        let mut counters = IdCounters::default();
        assert_eq!(counters.next_account(), 1);
        assert_eq!(counters.next_account(), 2);
        assert_eq!(counters.next_user(), 1);
    }
}
