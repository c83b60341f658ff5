//! YAML export of payoff plans

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::PlanExport;

/// Write an export as YAML with a short comment header
pub fn export_plan_yaml<W: Write>(export: &PlanExport, mut writer: W) -> FinanceResult<()> {
    let header = format!(
        "# ttm-finance payoff plan\n# Generated: {}\n# App Version: {}\n# Amounts are in cents.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
