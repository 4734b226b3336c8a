//! User profiles and couple links
//!
//! One login may cover two partners sharing a household; the primary user is
//! the profile created at sign-up, a spouse profile is secondary and linked
//! through a [`Couple`].

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::dates::age_on;
use crate::model::ids::{CoupleId, UserId};
use crate::model::limits::ContributionLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipStatus {
    Single,
    Married,
    CommonLaw,
}

impl RelationshipStatus {
    /// Row string used by the store, e.g. `"common-law"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipStatus::Single => "single",
            RelationshipStatus::Married => "married",
            RelationshipStatus::CommonLaw => "common-law",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(RelationshipStatus::Single),
            "married" => Some(RelationshipStatus::Married),
            "common-law" => Some(RelationshipStatus::CommonLaw),
            _ => None,
        }
    }
}

/// A person tracked by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<Date>,
    /// Free-form province name; unknown values fall back to Ontario in the
    /// tax tables.
    pub province: String,
    pub relationship_status: RelationshipStatus,
    pub couple_id: Option<CoupleId>,
    pub limits: ContributionLimits,
    /// False for a spouse profile created under the primary login.
    pub is_primary: bool,
}

impl User {
    /// Whole years of age at `today`, if a date of birth is on file.
    pub fn age(&self, today: Date) -> Option<i16> {
        self.date_of_birth.map(|dob| age_on(dob, today))
    }
}

/// Link between two partner profiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Couple {
    pub id: CoupleId,
    pub partner1: UserId,
    pub partner2: UserId,
    pub marriage_date: Option<Date>,
}

impl Couple {
    /// The other partner's id, if `user` belongs to this couple.
    pub fn partner_of(&self, user: UserId) -> Option<UserId> {
        if self.partner1 == user {
            Some(self.partner2)
        } else if self.partner2 == user {
            Some(self.partner1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_relationship_status_round_trip() {
        for status in [
            RelationshipStatus::Single,
            RelationshipStatus::Married,
            RelationshipStatus::CommonLaw,
        ] {
            assert_eq!(RelationshipStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(RelationshipStatus::parse("divorced"), None);
    }

    #[test]
    fn test_user_age() {
        let user = User {
            id: UserId(1),
            name: "Avery".to_string(),
            email: "avery@example.com".to_string(),
            date_of_birth: Some(date(1990, 6, 15)),
            province: "Ontario".to_string(),
            relationship_status: RelationshipStatus::Single,
            couple_id: None,
            limits: ContributionLimits::default(),
            is_primary: true,
        };
        assert_eq!(user.age(date(2024, 6, 14)), Some(33));
        assert_eq!(user.age(date(2024, 6, 15)), Some(34));
    }

    #[test]
    fn test_couple_partner_of() {
        let couple = Couple {
            id: CoupleId(1),
            partner1: UserId(1),
            partner2: UserId(2),
            marriage_date: None,
        };
        assert_eq!(couple.partner_of(UserId(1)), Some(UserId(2)));
        assert_eq!(couple.partner_of(UserId(2)), Some(UserId(1)));
        assert_eq!(couple.partner_of(UserId(3)), None);
    }
}
