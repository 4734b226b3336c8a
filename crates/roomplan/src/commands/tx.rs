use color_eyre::eyre::{Result, bail, eyre};

use roomplan_core::dates::{in_first_contribution_period, parse_date};
use roomplan_core::model::{
    AccountId, AccountKind, Transaction, TransactionId, TransactionKind, describe,
};
use roomplan_core::{format_currency, validate_contribution};

use super::resolve_user;
use crate::cli::TxCmd;
use crate::store::Store;

pub fn run(store: &mut Store, cmd: TxCmd) -> Result<()> {
    match cmd {
        TxCmd::Add {
            account,
            amount,
            kind,
            date,
            description,
            category,
            force,
        } => add(store, account, amount, &kind, date, description, category, force),
        TxCmd::List { account, user } => list(store, account, user),
        TxCmd::Remove { id } => remove(store, id),
    }
}

#[allow(clippy::too_many_arguments)]
fn add(
    store: &mut Store,
    account_id: u32,
    amount: f64,
    kind: &str,
    date: Option<String>,
    description: Option<String>,
    category: Option<String>,
    force: bool,
) -> Result<()> {
    let mut account = store.account(AccountId(account_id))?;
    let kind = TransactionKind::parse(kind).ok_or_else(|| {
        eyre!("unknown transaction type '{kind}' (expected contribution, withdrawal, or transfer)")
    })?;
    let date = match date {
        Some(s) => {
            parse_date(&s).ok_or_else(|| eyre!("invalid date '{s}' (expected YYYY-MM-DD)"))?
        }
        None => jiff::Zoned::now().date(),
    };

    // Room validation is advisory; --force records the transaction anyway.
    if kind == TransactionKind::Contribution {
        let check = validate_contribution(amount, account.remaining_room());
        if let Some(message) = check.message() {
            if force {
                tracing::warn!(
                    account_id = account.id.0,
                    message,
                    "recording contribution despite failed validation"
                );
                eprintln!("Warning: {message}");
            } else {
                bail!("{message} (pass --force to record it anyway)");
            }
        }
    } else if amount <= 0.0 {
        bail!("Amount must be greater than zero");
    }

    let description = description.unwrap_or_else(|| describe(kind, account.kind, amount));
    let transaction = store.create_transaction(Transaction {
        id: TransactionId(0),
        user_id: account.user_id,
        account_id: account.id,
        kind,
        amount,
        date,
        description,
        category,
    });

    account.apply(&transaction);
    store.update_account(&account)?;

    // RRSP contributions feed the user's period totals; TFSA withdrawals
    // restore room the following January.
    let mut user = store.user(account.user_id)?;
    match (account.kind, kind) {
        (AccountKind::Rrsp, TransactionKind::Contribution) => {
            let first_period = in_first_contribution_period(date);
            user.limits.rrsp.record_contribution(amount, first_period);
            store.update_user(&user)?;
            if first_period {
                println!(
                    "Note: dated {date} — attributed to the prior tax year (first-60-days rule)."
                );
            }
        }
        (AccountKind::Tfsa, TransactionKind::Withdrawal) => {
            user.limits.tfsa.withdrawal_room += amount;
            store.update_user(&user)?;
        }
        _ => {}
    }

    store.save()?;

    println!("Recorded: {}", transaction.description);
    println!(
        "  {} balance {}  room left {}",
        account.kind.label(),
        format_currency(account.current_balance),
        format_currency(account.remaining_room())
    );
    if kind == TransactionKind::Contribution && account.kind.is_tax_deductible() {
        println!("  This contribution is tax-deductible.");
    }
    Ok(())
}

fn list(store: &Store, account: Option<u32>, user: Option<u32>) -> Result<()> {
    // With an explicit account filter, skip the user default so transactions
    // on a spouse's account still show up
    let user_id = match (account, user) {
        (Some(_), None) => None,
        (_, user) => Some(resolve_user(store, user)?.id),
    };
    let transactions = store.transactions_for(user_id, account.map(AccountId));

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    for transaction in transactions {
        println!(
            "[{}] {}  {:<12} {:>12}  {}{}",
            transaction.id.0,
            transaction.date,
            transaction.kind.as_str(),
            format_currency(transaction.amount),
            transaction.description,
            transaction
                .category
                .as_deref()
                .map(|c| format!("  ({c})"))
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn remove(store: &mut Store, id: u32) -> Result<()> {
    let transaction = store.transaction(TransactionId(id))?;
    store.delete_transaction(transaction.id)?;
    store.save()?;

    println!("Deleted transaction: {}", transaction.description);
    println!("Account balances are not adjusted retroactively.");
    Ok(())
}
