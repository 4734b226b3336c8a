use color_eyre::eyre::{Result, bail};

use roomplan_core::contributions;
use roomplan_core::format_currency;
use roomplan_core::model::{FHSA_ANNUAL_LIMIT, FHSA_LIFETIME_LIMIT, FhsaLimits, TFSA_ANNUAL_LIMIT, User};

use super::resolve_user;
use crate::cli::LimitsCmd;
use crate::store::Store;

pub fn run(store: &mut Store, cmd: LimitsCmd) -> Result<()> {
    match cmd {
        LimitsCmd::Show { user } => {
            let user = resolve_user(store, user)?;
            show(&user);
            Ok(())
        }
        LimitsCmd::Set {
            user,
            rrsp_room,
            unused,
            pension_adjustment,
            rpp,
            dpsp,
            tfsa_room,
            tfsa_withdrawal_room,
            fhsa_annual,
            fhsa_lifetime,
            fhsa_contributed,
        } => set(
            store,
            user,
            rrsp_room,
            unused,
            pension_adjustment,
            rpp,
            dpsp,
            tfsa_room,
            tfsa_withdrawal_room,
            fhsa_annual,
            fhsa_lifetime,
            fhsa_contributed,
        ),
    }
}

fn show(user: &User) {
    let limits = &user.limits;

    println!("CRA contribution limits for {}", user.name);
    println!("RRSP:");
    println!(
        "  Deduction limit:        {}",
        format_currency(limits.rrsp.tax_year_contribution_room)
    );
    println!(
        "  Unused carry-forward:   {}",
        format_currency(limits.rrsp.unused_contributions)
    );
    println!(
        "  Pension adjustment:     {}",
        format_currency(limits.rrsp.pension_adjustment)
    );
    println!(
        "  First-period (Jan-Mar): {}",
        format_currency(limits.rrsp.first_period_contributions)
    );
    println!(
        "  Rest of year:           {}",
        format_currency(limits.rrsp.second_period_contributions)
    );
    println!(
        "  Total contributions:    {}",
        format_currency(limits.rrsp.total_tax_year_contributions)
    );
    println!(
        "  Available room:         {}",
        format_currency(limits.rrsp.available_contribution_room)
    );

    println!("TFSA:");
    println!(
        "  Annual max:             {}",
        format_currency(limits.tfsa.max_annual)
    );
    println!(
        "  Cumulative room:        {}",
        format_currency(limits.tfsa.cumulative_room)
    );
    println!(
        "  Withdrawal room:        {}",
        format_currency(limits.tfsa.withdrawal_room)
    );

    match &limits.fhsa {
        Some(fhsa) => {
            println!("FHSA:");
            println!(
                "  Annual limit:           {}",
                format_currency(fhsa.annual_limit)
            );
            println!(
                "  Lifetime limit:         {}",
                format_currency(fhsa.lifetime_limit)
            );
            println!(
                "  Contributed so far:     {}",
                format_currency(fhsa.total_contributed)
            );
            println!(
                "  Available room:         {}",
                format_currency(fhsa.available_room)
            );
        }
        None => println!("FHSA: not opened"),
    }
}

#[allow(clippy::too_many_arguments)]
#[allow(clippy::too_many_arguments)]
fn set(
    store: &mut Store,
    user: Option<u32>,
    rrsp_room: Option<f64>,
    unused: Option<f64>,
    pension_adjustment: Option<f64>,
    rpp: Option<f64>,
    dpsp: Option<f64>,
    tfsa_room: Option<f64>,
    tfsa_withdrawal_room: Option<f64>,
    fhsa_annual: Option<f64>,
    fhsa_lifetime: Option<f64>,
    fhsa_contributed: Option<f64>,
) -> Result<()> {
    let mut user = resolve_user(store, user)?;
    let limits = &mut user.limits;

    if let Some(room) = rrsp_room {
        limits.rrsp.tax_year_contribution_room = room;
    }
    if let Some(unused) = unused {
        limits.rrsp.unused_contributions = unused;
    }
    match (pension_adjustment, rpp, dpsp) {
        (Some(adjustment), _, _) => limits.rrsp.pension_adjustment = adjustment,
        (None, None, None) => {}
        (None, rpp, dpsp) => {
            // Estimate from employer-plan contributions when no T4 figure given
            limits.rrsp.pension_adjustment =
                contributions::pension_adjustment(rpp.unwrap_or(0.0), dpsp.unwrap_or(0.0));
        }
    }

    if let Some(room) = tfsa_room {
        limits.tfsa.cumulative_room = room;
        // The annual figure is a CRA constant, not user input
        limits.tfsa.max_annual = TFSA_ANNUAL_LIMIT;
    }
    if let Some(room) = tfsa_withdrawal_room {
        limits.tfsa.withdrawal_room = room;
    }

    if fhsa_annual.is_some() || fhsa_lifetime.is_some() || fhsa_contributed.is_some() {
        if let Some(annual) = fhsa_annual
            && annual > FHSA_ANNUAL_LIMIT
        {
            bail!(
                "FHSA annual limit cannot exceed {}",
                format_currency(FHSA_ANNUAL_LIMIT)
            );
        }
        if let Some(lifetime) = fhsa_lifetime
            && lifetime > FHSA_LIFETIME_LIMIT
        {
            bail!(
                "FHSA lifetime limit cannot exceed {}",
                format_currency(FHSA_LIFETIME_LIMIT)
            );
        }

        let fhsa = limits.fhsa.get_or_insert_with(FhsaLimits::default);
        if let Some(annual) = fhsa_annual {
            fhsa.annual_limit = annual;
        }
        if let Some(lifetime) = fhsa_lifetime {
            fhsa.lifetime_limit = lifetime;
        }
        if let Some(contributed) = fhsa_contributed {
            fhsa.total_contributed = contributed;
        }
    }

    limits.recompute();
    store.update_user(&user)?;
    store.save()?;

    tracing::info!(user_id = user.id.0, "updated CRA limits");
    println!("Updated limits.");
    println!(
        "  RRSP available room: {}",
        format_currency(user.limits.rrsp.available_contribution_room)
    );
    if let Some(fhsa) = &user.limits.fhsa {
        println!(
            "  FHSA available room: {}",
            format_currency(fhsa.available_room)
        );
    }
    Ok(())
}
