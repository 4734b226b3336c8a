use color_eyre::eyre::Result;

use roomplan_core::{
    format_currency, format_percentage, marginal_tax_rate, optimal_contribution, rrsp_tax_refund,
};

use super::resolve_user;
use crate::store::Store;

pub fn optimize(store: &Store, funds: f64, income: f64, user: Option<u32>) -> Result<()> {
    let user = resolve_user(store, user)?;
    let rate = marginal_tax_rate(&user.province, income);

    let rrsp_room = user.limits.rrsp.available_contribution_room;
    let tfsa_room = user.limits.tfsa.cumulative_room;
    let fhsa_room = user.limits.fhsa.map(|f| f.available_room).unwrap_or(0.0);

    let allocation = optimal_contribution(rrsp_room, tfsa_room, fhsa_room, funds, rate);
    tracing::info!(
        user_id = user.id.0,
        funds,
        rate,
        "computed contribution split"
    );

    println!(
        "Suggested split of {} for {} ({} marginal rate in {}):",
        format_currency(funds),
        user.name,
        format_percentage(rate),
        user.province
    );
    println!("  FHSA: {}", format_currency(allocation.fhsa));
    println!("  RRSP: {}", format_currency(allocation.rrsp));
    println!("  TFSA: {}", format_currency(allocation.tfsa));

    let leftover = funds - (allocation.rrsp + allocation.tfsa + allocation.fhsa);
    if leftover > 0.0 {
        println!("  Unallocated (no room left): {}", format_currency(leftover));
    }
    if !allocation.strategy.is_empty() {
        println!("  Strategy: {}", allocation.strategy);
    }
    if allocation.rrsp > 0.0 {
        println!(
            "  Estimated refund from the RRSP portion: {}",
            format_currency(rrsp_tax_refund(allocation.rrsp, rate))
        );
    }
    Ok(())
}

pub fn rate(province: &str, income: f64, contribution: Option<f64>) -> Result<()> {
    let rate = marginal_tax_rate(province, income);

    println!(
        "Marginal rate in {} at {} income: {}",
        province,
        format_currency(income),
        format_percentage(rate)
    );
    if let Some(contribution) = contribution {
        println!(
            "Estimated refund on a {} RRSP contribution: {}",
            format_currency(contribution),
            format_currency(rrsp_tax_refund(contribution, rate))
        );
    }
    Ok(())
}
