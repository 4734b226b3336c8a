use color_eyre::eyre::{Result, eyre};

use roomplan_core::dates::parse_date;
use roomplan_core::model::{ContributionLimits, RelationshipStatus, User, UserId};

use super::resolve_user;
use crate::cli::UserCmd;
use crate::store::Store;

pub fn run(store: &mut Store, cmd: UserCmd) -> Result<()> {
    match cmd {
        UserCmd::Add {
            name,
            email,
            dob,
            province,
            status,
            spouse,
        } => add(store, name, email, dob, province, status, spouse),
        UserCmd::Show { user } => show(store, user),
    }
}

fn add(
    store: &mut Store,
    name: String,
    email: String,
    dob: Option<String>,
    province: String,
    status: Option<String>,
    spouse: bool,
) -> Result<()> {
    let date_of_birth = match dob {
        Some(s) => Some(
            parse_date(&s).ok_or_else(|| eyre!("invalid date of birth '{s}' (expected YYYY-MM-DD)"))?,
        ),
        None => None,
    };

    let relationship_status = match status {
        Some(s) => RelationshipStatus::parse(&s)
            .ok_or_else(|| eyre!("unknown status '{s}' (expected single, married, or common-law)"))?,
        None if spouse => RelationshipStatus::Married,
        None => RelationshipStatus::Single,
    };

    // A spouse profile needs a primary profile to link against
    let primary = if spouse {
        Some(
            store
                .users()
                .iter()
                .find(|u| u.is_primary)
                .cloned()
                .ok_or_else(|| eyre!("cannot link a spouse before a primary profile exists"))?,
        )
    } else {
        None
    };

    // The first profile on file becomes the primary login
    let is_primary = !spouse && !store.users().iter().any(|u| u.is_primary);

    let user = store.create_user(User {
        id: UserId(0),
        name,
        email,
        date_of_birth,
        province,
        relationship_status,
        couple_id: None,
        limits: ContributionLimits::default(),
        is_primary,
    });

    if let Some(primary) = primary {
        store.create_couple(primary.id, user.id, None)?;
        store.save()?;
        println!(
            "Created spouse profile {} (id {}) linked to {}.",
            user.name, user.id.0, primary.name
        );
    } else {
        store.save()?;
        println!(
            "Created {} profile {} (id {}).",
            if user.is_primary { "primary" } else { "secondary" },
            user.name,
            user.id.0
        );
    }
    Ok(())
}

fn show(store: &Store, user: Option<u32>) -> Result<()> {
    let user = resolve_user(store, user)?;

    println!(
        "{} <{}> (id {}, {})",
        user.name,
        user.email,
        user.id.0,
        if user.is_primary { "primary" } else { "spouse" }
    );
    println!("  Province: {}", user.province);
    println!("  Status:   {}", user.relationship_status.as_str());
    if let Some(age) = user.age(jiff::Zoned::now().date()) {
        println!("  Age:      {age}");
    }

    if let Ok(couple) = store.couple_for(user.id)
        && let Some(partner_id) = couple.partner_of(user.id)
        && let Ok(partner) = store.user(partner_id)
    {
        println!("  Partner:  {} (id {})", partner.name, partner.id.0);
    }
    Ok(())
}
