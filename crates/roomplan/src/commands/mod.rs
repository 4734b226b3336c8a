//! Command handlers
//!
//! Each handler resolves its target entities, applies the change through the
//! store, saves once, and prints a human-readable result with the core
//! formatting helpers.

mod account;
mod goal;
mod limits;
mod planner;
mod summary;
mod tx;
mod user;

use color_eyre::eyre::Result;

use roomplan_core::error::LookupError;
use roomplan_core::model::{User, UserId};

use crate::cli::Command;
use crate::store::Store;

pub fn run(store: &mut Store, command: Command) -> Result<()> {
    match command {
        Command::Summary { user } => summary::run(store, user),
        Command::User(cmd) => user::run(store, cmd),
        Command::Account(cmd) => account::run(store, cmd),
        Command::Tx(cmd) => tx::run(store, cmd),
        Command::Limits(cmd) => limits::run(store, cmd),
        Command::Goal(cmd) => goal::run(store, cmd),
        Command::Optimize {
            funds,
            income,
            user,
        } => planner::optimize(store, funds, income, user),
        Command::Rate {
            province,
            income,
            contribution,
        } => planner::rate(&province, income, contribution),
    }
}

/// Resolve an optional `--user` id, defaulting to the primary profile.
fn resolve_user(store: &Store, id: Option<u32>) -> Result<User, LookupError> {
    match id {
        Some(id) => store.user(UserId(id)),
        None => store.primary_user(),
    }
}
