//! Core data models for ttm-finance
//!
//! Persisted entities (debts, savings goals) and the derived structures the
//! planners produce (payoff plans).

pub mod debt;
pub mod goal;
pub mod ids;
pub mod money;
pub mod ordering;
pub mod plan;
pub mod strategy;

pub use debt::Debt;
pub use goal::{GoalProgress, SavingsGoal};
pub use ids::{DebtId, GoalId};
pub use money::Money;
pub use ordering::{move_item, Positioned};
pub use plan::{DebtPayment, DebtPayoff, PaymentPlanEntry, PayoffOutcome, PayoffPlan, StrategySummary};
pub use strategy::{PayoffStrategy, Reprioritize};
