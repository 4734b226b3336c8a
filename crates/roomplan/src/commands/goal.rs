use color_eyre::eyre::{Result, eyre};

use roomplan_core::dates::parse_date;
use roomplan_core::format_currency;
use roomplan_core::model::{AccountKind, Goal, GoalId, Priority};

use super::resolve_user;
use crate::cli::GoalCmd;
use crate::store::Store;

pub fn run(store: &mut Store, cmd: GoalCmd) -> Result<()> {
    match cmd {
        GoalCmd::Add {
            title,
            target,
            current,
            date,
            priority,
            kinds,
            shared,
            user,
        } => add(store, title, target, current, date, &priority, kinds, shared, user),
        GoalCmd::List { user } => list(store, user),
        GoalCmd::Remove { id } => remove(store, id),
    }
}

#[allow(clippy::too_many_arguments)]
fn add(
    store: &mut Store,
    title: String,
    target: f64,
    current: f64,
    date: Option<String>,
    priority: &str,
    kinds: Vec<String>,
    shared: bool,
    user: Option<u32>,
) -> Result<()> {
    let user = resolve_user(store, user)?;
    let priority = Priority::parse(priority)
        .ok_or_else(|| eyre!("unknown priority '{priority}' (expected low, medium, or high)"))?;
    let target_date = match date {
        Some(s) => {
            Some(parse_date(&s).ok_or_else(|| eyre!("invalid date '{s}' (expected YYYY-MM-DD)"))?)
        }
        None => None,
    };
    let account_kinds = kinds
        .iter()
        .map(|s| {
            AccountKind::parse(s).ok_or_else(|| {
                eyre!("unknown account type '{s}' (expected one of RRSP, TFSA, RPP, DPSP, FHSA, RESP)")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let goal = store.create_goal(Goal {
        id: GoalId(0),
        user_id: user.id,
        title,
        target_amount: target,
        current_amount: current,
        target_date,
        account_kinds,
        priority,
        is_shared: shared,
    });
    store.save()?;

    println!(
        "Created goal '{}' targeting {} (id {}).",
        goal.title,
        format_currency(goal.target_amount),
        goal.id.0
    );
    Ok(())
}

fn list(store: &Store, user: Option<u32>) -> Result<()> {
    let user = resolve_user(store, user)?;
    let goals = store.goals_for(user.id);

    if goals.is_empty() {
        println!("No goals on file for {}.", user.name);
        return Ok(());
    }

    for goal in goals {
        let kinds = if goal.account_kinds.is_empty() {
            "any account".to_string()
        } else {
            goal.account_kinds
                .iter()
                .map(|k| k.label())
                .collect::<Vec<_>>()
                .join("/")
        };
        println!(
            "[{}] {} — {} of {} ({:.0}%, {} priority, {}){}",
            goal.id.0,
            goal.title,
            format_currency(goal.current_amount),
            format_currency(goal.target_amount),
            goal.progress_percent(),
            goal.priority.as_str(),
            kinds,
            if goal.is_shared { ", shared" } else { "" }
        );
    }
    Ok(())
}

fn remove(store: &mut Store, id: u32) -> Result<()> {
    let goal = store.goal(GoalId(id))?;
    store.delete_goal(goal.id)?;
    store.save()?;

    println!("Deleted goal '{}'.", goal.title);
    Ok(())
}
