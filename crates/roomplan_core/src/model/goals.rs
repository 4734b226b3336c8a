//! Savings goals

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::accounts::AccountKind;
use crate::model::ids::{GoalId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// A target amount to accumulate across one or more account types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub user_id: UserId,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: Option<Date>,
    /// Account types this goal draws on; empty means any.
    pub account_kinds: Vec<AccountKind>,
    pub priority: Priority,
    /// Shared with the partner profile.
    pub is_shared: bool,
}

impl Goal {
    /// Progress toward the target as a whole-number percent, clamped to
    /// 0..=100. A non-positive target reads as zero progress.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_goal(current: f64, target: f64) -> Goal {
        Goal {
            id: GoalId(1),
            user_id: UserId(1),
            title: "House down payment".to_string(),
            target_amount: target,
            current_amount: current,
            target_date: None,
            account_kinds: vec![AccountKind::Fhsa, AccountKind::Tfsa],
            priority: Priority::High,
            is_shared: true,
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(test_goal(25_000.0, 100_000.0).progress_percent(), 25.0);
        assert_eq!(test_goal(150_000.0, 100_000.0).progress_percent(), 100.0);
        assert_eq!(test_goal(5_000.0, 0.0).progress_percent(), 0.0);
    }

    #[test]
    fn test_priority_round_trip() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::parse("urgent"), None);
    }
}
