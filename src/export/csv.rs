//! CSV export of payoff schedules
//!
//! One row per debt per month, spreadsheet-friendly amounts (no symbol).

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, PayoffPlan, StrategySummary};

fn amount(m: Money) -> String {
    m.format_with_symbol("")
}

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Write the month-by-month schedule of a plan
pub fn export_plan_csv<W: Write>(plan: &PayoffPlan, writer: W) -> FinanceResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record([
        "Month",
        "Debt",
        "Payment",
        "Interest",
        "Principal",
        "Remaining",
        "Total Paid",
        "Total Interest",
    ])
    .map_err(export_err)?;

    for entry in &plan.entries {
        for payment in &entry.payments {
            out.write_record([
                entry.month.to_string(),
                payment.name.clone(),
                amount(payment.payment),
                amount(payment.interest),
                amount(payment.principal()),
                amount(payment.remaining_balance),
                amount(entry.total_paid),
                amount(entry.total_interest),
            ])
            .map_err(export_err)?;
        }
    }

    out.flush().map_err(export_err)?;
    Ok(())
}

/// Write one row per strategy
pub fn export_comparison_csv<W: Write>(
    summaries: &[StrategySummary],
    writer: W,
) -> FinanceResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(["Strategy", "Months", "Total Paid", "Total Interest", "Completed"])
        .map_err(export_err)?;

    for summary in summaries {
        out.write_record([
            summary.strategy.to_string(),
            summary.months.to_string(),
            amount(summary.total_paid),
            amount(summary.total_interest),
            summary.completed.to_string(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Debt, PayoffStrategy};
    use crate::services::payoff::PayoffSimulator;

    #[test]
    fn test_export_plan_csv() {
        let debts = vec![Debt::new(
            "Store, Card",
            Money::from_cents(10000),
            0.0,
            Money::from_cents(2500),
        )];
        let outcome = PayoffSimulator::new(PayoffStrategy::Snowball)
            .run(&debts, Money::from_cents(5000))
            .unwrap();
        let plan = outcome.plan().unwrap();

        let mut buffer = Vec::new();
        export_plan_csv(plan, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Month,Debt,Payment,Interest,Principal,Remaining,Total Paid,Total Interest");
        assert_eq!(lines[1], "1,\"Store, Card\",50.00,0.00,50.00,50.00,50.00,0.00");
        assert_eq!(lines[2], "2,\"Store, Card\",50.00,0.00,50.00,0.00,100.00,0.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_comparison_csv() {
        let summaries = vec![StrategySummary {
            strategy: PayoffStrategy::Avalanche,
            months: 12,
            total_paid: Money::from_cents(123456),
            total_interest: Money::from_cents(3456),
            completed: true,
        }];

        let mut buffer = Vec::new();
        export_comparison_csv(&summaries, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Avalanche,12,1234.56,34.56,true"));
    }
}
