//! Savings goal model
//!
//! A goal has a target amount, what has been saved so far, and optionally a
//! monthly contribution and/or a date the target should be reached by.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::ordering::Positioned;

/// A persisted savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,

    /// Goal name (e.g., "Emergency Fund")
    pub name: String,

    /// Amount to reach
    pub target: Money,

    /// Amount saved so far
    #[serde(default)]
    pub saved: Money,

    /// Planned monthly contribution
    #[serde(default)]
    pub monthly_contribution: Money,

    /// Date the target should be reached by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,

    #[serde(default)]
    pub sort_order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Computed progress of a goal on a given day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Percent of the target saved, capped at 100
    pub percent: f64,
    pub remaining: Money,
    /// Months to finish at the current contribution; `None` if it never finishes
    pub months_to_target: Option<u32>,
    /// Monthly contribution needed to finish by `target_date`
    pub required_monthly: Option<Money>,
    /// Whether the current contribution finishes on or before `target_date`
    pub on_track: Option<bool>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target: Money) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            saved: Money::zero(),
            monthly_contribution: Money::zero(),
            target_date: None,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn remaining(&self) -> Money {
        (self.target - self.saved).non_negative()
    }

    pub fn is_complete(&self) -> bool {
        self.saved >= self.target
    }

    /// Add money to the goal
    pub fn deposit(&mut self, amount: Money) {
        self.saved += amount;
        self.updated_at = Utc::now();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Progress as of `today`
    pub fn progress(&self, today: NaiveDate) -> GoalProgress {
        let remaining = self.remaining();

        let percent = if self.target.is_positive() {
            (self.saved.as_f64() / self.target.as_f64() * 100.0).clamp(0.0, 100.0)
        } else {
            100.0
        };

        let months_to_target = if remaining.is_zero() {
            Some(0)
        } else if self.monthly_contribution.is_positive() {
            let months = div_ceil(remaining.cents(), self.monthly_contribution.cents());
            u32::try_from(months).ok()
        } else {
            None
        };

        let (required_monthly, on_track) = match self.target_date {
            Some(date) => {
                let months_left = months_until(today, date);
                let required = if months_left == 0 {
                    remaining
                } else {
                    Money::from_cents(div_ceil(remaining.cents(), months_left as i64))
                };
                let on_track = months_to_target.map(|m| m <= months_left);
                (Some(required), Some(on_track.unwrap_or(false)))
            }
            None => (None, None),
        };

        GoalProgress {
            percent,
            remaining,
            months_to_target,
            required_monthly,
            on_track,
        }
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(GoalValidationError::NameTooLong(self.name.len()));
        }
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }
        if self.saved.is_negative() {
            return Err(GoalValidationError::NegativeAmount("saved", self.saved));
        }
        if self.monthly_contribution.is_negative() {
            return Err(GoalValidationError::NegativeAmount(
                "monthly contribution",
                self.monthly_contribution,
            ));
        }
        Ok(())
    }
}

/// Whole calendar months from `from` until `to`; zero if `to` is not later
fn months_until(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}

impl Positioned for SavingsGoal {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn set_sort_order(&mut self, order: i32) {
        self.sort_order = order;
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} of {})", self.name, self.saved, self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveTarget(Money),
    NegativeAmount(&'static str, Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Goal name too long ({} chars, max 100)", len),
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be greater than zero: {}", target)
            }
            Self::NegativeAmount(field, amount) => {
                write!(f, "Goal {} cannot be negative: {}", field, amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_with_contribution() {
        let mut goal = SavingsGoal::new("Emergency Fund", Money::from_dollars(1000));
        goal.saved = Money::from_dollars(250);
        goal.monthly_contribution = Money::from_dollars(100);

        let progress = goal.progress(date(2025, 1, 15));
        assert_eq!(progress.percent, 25.0);
        assert_eq!(progress.remaining, Money::from_dollars(750));
        assert_eq!(progress.months_to_target, Some(8));
        assert_eq!(progress.required_monthly, None);
        assert_eq!(progress.on_track, None);
    }

    #[test]
    fn test_months_to_target_beyond_u32_is_unknown() {
        let mut goal = SavingsGoal::new("Moonshot", Money::from_cents(i64::MAX / 2));
        goal.monthly_contribution = Money::from_cents(1);
        goal.target_date = Some(date(2030, 1, 1));

        let progress = goal.progress(date(2025, 1, 15));
        assert_eq!(progress.months_to_target, None);
        assert_eq!(progress.on_track, Some(false));
    }

    #[test]
    fn test_progress_without_contribution_never_finishes() {
        let goal = SavingsGoal::new("Car", Money::from_dollars(5000));
        assert_eq!(goal.progress(date(2025, 1, 1)).months_to_target, None);
    }

    #[test]
    fn test_progress_with_target_date() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_dollars(1200));
        goal.monthly_contribution = Money::from_dollars(100);
        goal.target_date = Some(date(2025, 7, 1));

        let progress = goal.progress(date(2025, 1, 1));
        assert_eq!(progress.required_monthly, Some(Money::from_dollars(200)));
        assert_eq!(progress.on_track, Some(false));

        goal.monthly_contribution = Money::from_dollars(250);
        assert_eq!(goal.progress(date(2025, 1, 1)).on_track, Some(true));
    }

    #[test]
    fn test_past_target_date_requires_everything_now() {
        let mut goal = SavingsGoal::new("Late", Money::from_dollars(300));
        goal.target_date = Some(date(2024, 1, 1));
        let progress = goal.progress(date(2025, 1, 1));
        assert_eq!(progress.required_monthly, Some(Money::from_dollars(300)));
    }

    #[test]
    fn test_overfunded_goal() {
        let mut goal = SavingsGoal::new("Done", Money::from_dollars(100));
        goal.deposit(Money::from_dollars(150));
        assert!(goal.is_complete());
        let progress = goal.progress(date(2025, 1, 1));
        assert_eq!(progress.percent, 100.0);
        assert_eq!(progress.remaining, Money::zero());
        assert_eq!(progress.months_to_target, Some(0));
    }

    #[test]
    fn test_months_until() {
        assert_eq!(months_until(date(2025, 1, 15), date(2025, 3, 14)), 1);
        assert_eq!(months_until(date(2025, 1, 15), date(2025, 3, 15)), 2);
        assert_eq!(months_until(date(2025, 1, 15), date(2024, 3, 15)), 0);
    }

    #[test]
    fn test_validation() {
        let mut goal = SavingsGoal::new("Fund", Money::zero());
        assert!(matches!(goal.validate(), Err(GoalValidationError::NonPositiveTarget(_))));
        goal.target = Money::from_dollars(10);
        assert!(goal.validate().is_ok());
        goal.name = String::new();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));
    }
}
