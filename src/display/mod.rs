//! Display formatting for terminal output
//!
//! Plain-text tables and detail views. Every formatter takes the currency
//! symbol from the user's settings.

pub mod debt;
pub mod format;
pub mod goal;
pub mod plan;
pub mod projection;

pub use debt::{format_debt_details, format_debt_list};
pub use goal::{format_goal_details, format_goal_list};
pub use plan::{format_comparison, format_outcome, format_plan_summary, format_schedule};
pub use projection::{format_compound, format_fire};
