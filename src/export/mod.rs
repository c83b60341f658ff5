//! Export of payoff plans
//!
//! - CSV: month-by-month schedule or strategy comparison
//! - JSON: full result with inputs, machine-readable
//! - YAML: same content as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_comparison_csv, export_plan_csv};
pub use json::{export_plan_json, PlanExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;
