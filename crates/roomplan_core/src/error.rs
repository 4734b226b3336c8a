use std::fmt;

use crate::model::{AccountId, GoalId, TransactionId, UserId};

/// Errors related to entity lookups
#[derive(Debug, Clone)]
pub enum LookupError {
    UserNotFound(UserId),
    AccountNotFound(AccountId),
    TransactionNotFound(TransactionId),
    GoalNotFound(GoalId),
    CoupleNotFound(UserId),
    /// The store holds no user profiles yet
    NoUsers,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UserNotFound(id) => write!(f, "user {id:?} not found"),
            LookupError::AccountNotFound(id) => write!(f, "account {id:?} not found"),
            LookupError::TransactionNotFound(id) => write!(f, "transaction {id:?} not found"),
            LookupError::GoalNotFound(id) => write!(f, "goal {id:?} not found"),
            LookupError::CoupleNotFound(id) => write!(f, "no couple linked to user {id:?}"),
            LookupError::NoUsers => write!(f, "no user profiles exist yet"),
        }
    }
}

impl std::error::Error for LookupError {}

pub type Result<T> = std::result::Result<T, LookupError>;
