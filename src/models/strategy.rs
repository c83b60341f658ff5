//! Debt payoff strategies
//!
//! A strategy decides which debt receives the budget left over after every
//! minimum payment has been made.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::debt::Debt;

/// Prioritization used to direct leftover budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Smallest outstanding balance first
    #[default]
    Snowball,
    /// Highest interest rate first
    Avalanche,
}

impl PayoffStrategy {
    pub const ALL: [PayoffStrategy; 2] = [PayoffStrategy::Snowball, PayoffStrategy::Avalanche];

    /// Parse a strategy from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "snowball" | "smallest" | "balance" => Some(Self::Snowball),
            "avalanche" | "highest" | "rate" | "interest" => Some(Self::Avalanche),
            _ => None,
        }
    }

    /// Comparator for two debts under this strategy
    pub fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        match self {
            Self::Snowball => a.balance.cmp(&b.balance),
            Self::Avalanche => b.interest_rate.total_cmp(&a.interest_rate),
        }
    }

    /// Sort debts into priority order. The sort is stable, so ties keep
    /// their input order.
    pub fn prioritize(&self, debts: &mut [Debt]) {
        debts.sort_by(|a, b| self.compare(a, b));
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Snowball => "smallest balance first",
            Self::Avalanche => "highest interest rate first",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snowball => write!(f, "Snowball"),
            Self::Avalanche => write!(f, "Avalanche"),
        }
    }
}

/// When the priority order is evaluated during a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Reprioritize {
    /// Sort once before the first month and keep that order
    #[default]
    Fixed,
    /// Re-sort at the start of every month using current balances
    Monthly,
}
