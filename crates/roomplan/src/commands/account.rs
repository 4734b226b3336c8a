use color_eyre::eyre::{Result, eyre};

use roomplan_core::format_currency;
use roomplan_core::model::{Account, AccountId, AccountKind};

use super::resolve_user;
use crate::cli::AccountCmd;
use crate::store::Store;

pub fn run(store: &mut Store, cmd: AccountCmd) -> Result<()> {
    match cmd {
        AccountCmd::Add {
            kind,
            institution,
            balance,
            room,
            user,
        } => add(store, &kind, institution, balance, room, user),
        AccountCmd::List { user } => list(store, user),
        AccountCmd::Remove { id } => remove(store, id),
    }
}

fn parse_kind(s: &str) -> Result<AccountKind> {
    AccountKind::parse(s).ok_or_else(|| {
        eyre!("unknown account type '{s}' (expected one of RRSP, TFSA, RPP, DPSP, FHSA, RESP)")
    })
}

fn add(
    store: &mut Store,
    kind: &str,
    institution: String,
    balance: f64,
    room: Option<f64>,
    user: Option<u32>,
) -> Result<()> {
    let user = resolve_user(store, user)?;
    let kind = parse_kind(kind)?;

    let account = store.create_account(Account {
        id: AccountId(0),
        user_id: user.id,
        kind,
        institution_name: institution,
        account_number: String::new(),
        current_balance: balance,
        contribution_room: room.unwrap_or_else(|| kind.default_contribution_room()),
        ytd_contributions: 0.0,
    });
    store.save()?;

    println!(
        "Opened {} account {} at {} with {} contribution room (id {})",
        account.kind.label(),
        account.account_number,
        account.institution_name,
        format_currency(account.contribution_room),
        account.id.0
    );
    Ok(())
}

fn list(store: &Store, user: Option<u32>) -> Result<()> {
    let user = resolve_user(store, user)?;
    let accounts = store.accounts_for(user.id);

    if accounts.is_empty() {
        println!("No accounts on file for {}.", user.name);
        return Ok(());
    }

    for account in accounts {
        println!(
            "[{}] {:<5} {} {}  balance {}  room left {}",
            account.id.0,
            account.kind.label(),
            account.institution_name,
            account.account_number,
            format_currency(account.current_balance),
            format_currency(account.remaining_room())
        );
    }
    Ok(())
}

fn remove(store: &mut Store, id: u32) -> Result<()> {
    let account = store.account(AccountId(id))?;
    store.delete_account(account.id)?;
    store.save()?;

    println!(
        "Deleted {} account {} and its transactions.",
        account.kind.label(),
        account.account_number
    );
    Ok(())
}
