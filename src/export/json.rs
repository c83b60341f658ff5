//! JSON export of payoff plans
//!
//! Wraps the simulation result with the inputs and a schema version so an
//! exported file can be read back on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Debt, PayoffOutcome, StrategySummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,

    /// Debts the plan was computed from
    pub debts: Vec<Debt>,

    /// Absent when only a comparison was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PayoffOutcome>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparison: Vec<StrategySummary>,
}

impl PlanExport {
    pub fn new(debts: Vec<Debt>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            debts,
            outcome: None,
            comparison: Vec::new(),
        }
    }

    pub fn with_outcome(mut self, outcome: PayoffOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_comparison(mut self, comparison: Vec<StrategySummary>) -> Self {
        self.comparison = comparison;
        self
    }
}

/// Write an export as pretty-printed JSON
pub fn export_plan_json<W: Write>(export: &PlanExport, mut writer: W) -> FinanceResult<()> {
    serde_json::to_writer_pretty(&mut writer, export)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PayoffStrategy};
    use crate::services::payoff::PayoffSimulator;

    #[test]
    fn test_export_plan_json() {
        let debts = vec![Debt::new("Visa", Money::from_dollars(100), 0.0, Money::from_dollars(50))];
        let outcome = PayoffSimulator::new(PayoffStrategy::Avalanche)
            .run(&debts, Money::from_dollars(50))
            .unwrap();

        let export = PlanExport::new(debts).with_outcome(outcome);
        let mut buffer = Vec::new();
        export_plan_json(&export, &mut buffer).unwrap();

        let parsed: PlanExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.debts.len(), 1);

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["outcome"]["status"], "completed");
        assert_eq!(value["outcome"]["plan"]["strategy"], "avalanche");
        assert!(value.get("comparison").is_none());
    }
}
