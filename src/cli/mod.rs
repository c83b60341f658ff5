//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers print
//! their results and return errors for `main` to report.

pub mod audit;
pub mod config;
pub mod debt;
pub mod goal;
pub mod plan;
pub mod project;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, ConfigArgs};
pub use debt::{handle_debt_command, DebtCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use plan::{handle_plan_command, OutputFormat, PlanArgs};
pub use project::{handle_project_command, ProjectCommands};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, PayoffStrategy};

/// Parse a user-entered amount such as "1,250.00" or "$40"
pub(crate) fn parse_money(label: &str, input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid {} '{}'. Use a format like '1000.00' or '1000'. Error: {}",
            label, input, e
        ))
    })
}

pub(crate) fn parse_optional_money(label: &str, input: Option<&str>) -> FinanceResult<Option<Money>> {
    input.map(|s| parse_money(label, s)).transpose()
}

pub(crate) fn parse_strategy(input: &str) -> FinanceResult<PayoffStrategy> {
    PayoffStrategy::parse(input).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid strategy: '{}'. Valid strategies: snowball, avalanche",
            input
        ))
    })
}

/// Convert a 1-based position from the command line to an index
pub(crate) fn position_index(position: usize) -> FinanceResult<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| FinanceError::Validation("Positions start at 1".into()))
}
