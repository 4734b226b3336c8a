mod accounts;
mod goals;
mod ids;
mod limits;
mod transactions;
mod users;

pub use accounts::{Account, AccountKind};
pub use goals::{Goal, Priority};
pub use ids::{AccountId, CoupleId, GoalId, TransactionId, UserId};
pub use limits::{
    ContributionLimits, FHSA_ANNUAL_LIMIT, FHSA_LIFETIME_LIMIT, FhsaLimits, RRSP_DOLLAR_LIMIT,
    RrspLimits, TFSA_ANNUAL_LIMIT, TFSA_CUMULATIVE_ROOM, TfsaLimits,
};
pub use transactions::{Transaction, TransactionKind, describe};
pub use users::{Couple, RelationshipStatus, User};
