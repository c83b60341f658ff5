//! Service layer for ttm-finance
//!
//! Services add validation, ordering and audit logging on top of the
//! repositories, and host the pure planners (payoff, projections).

pub mod debt;
pub mod goal;
pub mod payoff;
pub mod projection;

pub use debt::{DebtService, DebtTotals, DebtUpdate};
pub use goal::{GoalService, GoalSummary, GoalUpdate};
pub use payoff::{compare_strategies, PayoffSimulator, DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS};
pub use projection::{
    project_compound, project_fire, CompoundInput, CompoundProjection, FireInput, FireProjection,
};
