use color_eyre::eyre::Result;

use roomplan_core::{PortfolioSummary, format_currency};

use super::resolve_user;
use crate::store::Store;

/// How many recent transactions the dashboard shows.
const RECENT_LIMIT: usize = 5;

pub fn run(store: &mut Store, user: Option<u32>) -> Result<()> {
    let user = resolve_user(store, user)?;
    let accounts = store.accounts_for(user.id);
    let summary = PortfolioSummary::from_accounts(&accounts);

    println!("Portfolio for {}", user.name);
    println!("  Total balance:      {}", format_currency(summary.total_balance));
    println!(
        "  YTD contributions:  {}",
        format_currency(summary.total_contributions)
    );
    println!("  Contribution room:  {}", format_currency(summary.total_room));
    println!(
        "  Remaining room:     {}",
        format_currency(summary.remaining_room)
    );

    if !summary.by_kind.is_empty() {
        println!();
        println!("By account type:");
        for (kind, balance) in &summary.by_kind {
            println!("  {:<5} {}", kind.label(), format_currency(*balance));
        }
    }

    let recent = store.transactions_for(Some(user.id), None);
    if !recent.is_empty() {
        println!();
        println!("Recent transactions:");
        for transaction in recent.iter().take(RECENT_LIMIT) {
            println!(
                "  {}  {:<12} {:>12}  {}",
                transaction.date,
                transaction.kind.as_str(),
                format_currency(transaction.amount),
                transaction.description
            );
        }
    }

    Ok(())
}
