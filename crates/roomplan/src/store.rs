//! JSON file store for the planner ledger
//!
//! Directory structure:
//! ~/.roomplan/
//!   roomplan.log         # application log
//!   ledger.json          # users, couples, accounts, transactions, goals
//!
//! The store is constructed explicitly with its data directory and passed by
//! reference into command handlers; there is no global client. Entities are
//! held in memory as domain values and cross the file boundary through the
//! row mapping pairs in [`crate::rows`]. One `save()` rewrites the whole
//! document with a write-then-rename, which is the only durability measure
//! on offer.

use std::fs;
use std::path::{Path, PathBuf};

use roomplan_core::error::LookupError;
use roomplan_core::model::{
    Account, AccountId, Couple, CoupleId, Goal, GoalId, Transaction, TransactionId, User, UserId,
};

use crate::rows::{
    IdCounters, Ledger, account_to_row, couple_to_row, goal_to_row, row_to_account, row_to_couple,
    row_to_goal, row_to_transaction, row_to_user, transaction_to_row, user_to_row,
};

/// Error types for store operations
#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "IO error: {msg}"),
            StoreError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StoreError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// File-backed store for every entity the planner tracks.
pub struct Store {
    root: PathBuf,
    counters: IdCounters,
    users: Vec<User>,
    couples: Vec<Couple>,
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
}

impl Store {
    /// Open the store at `root`, creating the directory and an empty ledger
    /// on first use.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .map_err(|e| StoreError::Io(format!("Failed to create data directory: {e}")))?;

        let path = root.join("ledger.json");
        let ledger = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| StoreError::Io(format!("Failed to read ledger: {e}")))?;
            serde_json::from_str(&content)
                .map_err(|e| StoreError::Parse(format!("Failed to parse ledger: {e}")))?
        } else {
            Ledger::default()
        };

        Self::from_ledger(root, ledger)
    }

    fn from_ledger(root: PathBuf, ledger: Ledger) -> Result<Self, StoreError> {
        Ok(Store {
            root,
            counters: ledger.counters,
            users: ledger.users.iter().map(row_to_user).collect::<Result<_, _>>()?,
            couples: ledger
                .couples
                .iter()
                .map(row_to_couple)
                .collect::<Result<_, _>>()?,
            accounts: ledger
                .accounts
                .iter()
                .map(row_to_account)
                .collect::<Result<_, _>>()?,
            transactions: ledger
                .transactions
                .iter()
                .map(row_to_transaction)
                .collect::<Result<_, _>>()?,
            goals: ledger.goals.iter().map(row_to_goal).collect::<Result<_, _>>()?,
        })
    }

    fn to_ledger(&self) -> Ledger {
        Ledger {
            counters: self.counters,
            users: self.users.iter().map(user_to_row).collect(),
            couples: self.couples.iter().map(couple_to_row).collect(),
            accounts: self.accounts.iter().map(account_to_row).collect(),
            transactions: self.transactions.iter().map(transaction_to_row).collect(),
            goals: self.goals.iter().map(goal_to_row).collect(),
        }
    }

    fn ledger_path(&self) -> PathBuf {
        self.root.join("ledger.json")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist the whole ledger with a write-then-rename.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.to_ledger())
            .map_err(|e| StoreError::Serialize(format!("Failed to serialize ledger: {e}")))?;

        let path = self.ledger_path();
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .map_err(|e| StoreError::Io(format!("Failed to write ledger: {e}")))?;
        fs::rename(&temp_path, &path)
            .map_err(|e| StoreError::Io(format!("Failed to replace ledger: {e}")))?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Users and couples
    // ------------------------------------------------------------------

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Result<User, LookupError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(LookupError::UserNotFound(id))
    }

    /// The profile created at sign-up, falling back to the first profile on
    /// file when none is flagged primary.
    pub fn primary_user(&self) -> Result<User, LookupError> {
        self.users
            .iter()
            .find(|u| u.is_primary)
            .or_else(|| self.users.first())
            .cloned()
            .ok_or(LookupError::NoUsers)
    }

    /// Insert a new user; the draft's id is replaced with a fresh one.
    pub fn create_user(&mut self, draft: User) -> User {
        let user = User {
            id: UserId(self.counters.next_user()),
            ..draft
        };
        tracing::info!(user_id = user.id.0, name = %user.name, "created user");
        self.users.push(user.clone());
        user
    }

    pub fn update_user(&mut self, user: &User) -> Result<(), LookupError> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(LookupError::UserNotFound(user.id))?;
        *slot = user.clone();
        Ok(())
    }

    /// Link two users as a couple and stamp the couple id on both profiles.
    pub fn create_couple(
        &mut self,
        partner1: UserId,
        partner2: UserId,
        marriage_date: Option<jiff::civil::Date>,
    ) -> Result<Couple, LookupError> {
        // Both partners must exist before the link is created
        self.user(partner1)?;
        self.user(partner2)?;

        let couple = Couple {
            id: CoupleId(self.counters.next_couple()),
            partner1,
            partner2,
            marriage_date,
        };
        self.couples.push(couple);

        for user in self.users.iter_mut() {
            if user.id == partner1 || user.id == partner2 {
                user.couple_id = Some(couple.id);
            }
        }

        tracing::info!(couple_id = couple.id.0, "linked couple");
        Ok(couple)
    }

    pub fn couple_for(&self, user: UserId) -> Result<Couple, LookupError> {
        self.couples
            .iter()
            .find(|c| c.partner1 == user || c.partner2 == user)
            .copied()
            .ok_or(LookupError::CoupleNotFound(user))
    }

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    pub fn account(&self, id: AccountId) -> Result<Account, LookupError> {
        self.accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(LookupError::AccountNotFound(id))
    }

    /// All accounts belonging to `user`, newest first.
    pub fn accounts_for(&self, user: UserId) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter(|a| a.user_id == user)
            .cloned()
            .collect();
        accounts.sort_by(|a, b| b.id.cmp(&a.id));
        accounts
    }

    /// Insert a new account; the draft's id and masked number are assigned
    /// here.
    pub fn create_account(&mut self, draft: Account) -> Account {
        let id = AccountId(self.counters.next_account());
        let account = Account {
            id,
            account_number: Account::masked_number(id),
            ..draft
        };
        tracing::info!(
            account_id = account.id.0,
            kind = account.kind.label(),
            "created account"
        );
        self.accounts.push(account.clone());
        account
    }

    pub fn update_account(&mut self, account: &Account) -> Result<(), LookupError> {
        let slot = self
            .accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or(LookupError::AccountNotFound(account.id))?;
        *slot = account.clone();
        Ok(())
    }

    /// Remove an account along with its transaction history.
    pub fn delete_account(&mut self, id: AccountId) -> Result<(), LookupError> {
        if !self.accounts.iter().any(|a| a.id == id) {
            return Err(LookupError::AccountNotFound(id));
        }
        self.accounts.retain(|a| a.id != id);
        self.transactions.retain(|t| t.account_id != id);
        tracing::info!(account_id = id.0, "deleted account");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    pub fn transaction(&self, id: TransactionId) -> Result<Transaction, LookupError> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(LookupError::TransactionNotFound(id))
    }

    /// Transactions filtered by user and/or account, newest date first.
    pub fn transactions_for(
        &self,
        user: Option<UserId>,
        account: Option<AccountId>,
    ) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| user.is_none_or(|u| t.user_id == u))
            .filter(|t| account.is_none_or(|a| t.account_id == a))
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        transactions
    }

    pub fn create_transaction(&mut self, draft: Transaction) -> Transaction {
        let transaction = Transaction {
            id: TransactionId(self.counters.next_transaction()),
            ..draft
        };
        tracing::info!(
            transaction_id = transaction.id.0,
            account_id = transaction.account_id.0,
            kind = transaction.kind.as_str(),
            amount = transaction.amount,
            "recorded transaction"
        );
        self.transactions.push(transaction.clone());
        transaction
    }

    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<(), LookupError> {
        if !self.transactions.iter().any(|t| t.id == id) {
            return Err(LookupError::TransactionNotFound(id));
        }
        self.transactions.retain(|t| t.id != id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Goals
    // ------------------------------------------------------------------

    pub fn goal(&self, id: GoalId) -> Result<Goal, LookupError> {
        self.goals
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(LookupError::GoalNotFound(id))
    }

    pub fn goals_for(&self, user: UserId) -> Vec<Goal> {
        self.goals
            .iter()
            .filter(|g| g.user_id == user)
            .cloned()
            .collect()
    }

    pub fn create_goal(&mut self, draft: Goal) -> Goal {
        let goal = Goal {
            id: GoalId(self.counters.next_goal()),
            ..draft
        };
        self.goals.push(goal.clone());
        goal
    }

    pub fn update_goal(&mut self, goal: &Goal) -> Result<(), LookupError> {
        let slot = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or(LookupError::GoalNotFound(goal.id))?;
        *slot = goal.clone();
        Ok(())
    }

    pub fn delete_goal(&mut self, id: GoalId) -> Result<(), LookupError> {
        if !self.goals.iter().any(|g| g.id == id) {
            return Err(LookupError::GoalNotFound(id));
        }
        self.goals.retain(|g| g.id != id);
        Ok(())
    }
}
