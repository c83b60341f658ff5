//! Payoff plan display formatting

use super::format::{column_width, format_duration, money};
use crate::models::{PayoffOutcome, PayoffPlan, StrategySummary};

/// Format a simulation result: summary, payoff order and schedule
pub fn format_outcome(outcome: &PayoffOutcome, symbol: &str) -> String {
    match outcome {
        PayoffOutcome::BudgetInsufficient {
            required,
            available,
        } => format!(
            "Budget of {} does not cover the minimum payments of {} (short by {}).\n",
            money(*available, symbol),
            money(*required, symbol),
            money(*required - *available, symbol),
        ),
        PayoffOutcome::Completed { plan } => {
            let mut output = format_plan_summary(plan, symbol);
            output.push_str(&format!(
                "\nDebt free in {}.\n\n",
                format_duration(plan.months())
            ));
            output.push_str(&format_schedule(plan, symbol));
            output
        }
        PayoffOutcome::HorizonExceeded {
            plan,
            horizon_months,
        } => {
            let mut output = format_plan_summary(plan, symbol);
            output.push_str(&format!(
                "\nNot debt free within {} months; {} still owed.\n\n",
                horizon_months,
                money(plan.remaining_balance(), symbol)
            ));
            output.push_str(&format_schedule(plan, symbol));
            output
        }
    }
}

/// Headline numbers and the month each debt is paid off
pub fn format_plan_summary(plan: &PayoffPlan, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Strategy:         {} ({})\n",
        plan.strategy,
        plan.strategy.description()
    ));
    output.push_str(&format!(
        "Monthly Budget:   {}\n",
        money(plan.monthly_budget, symbol)
    ));
    output.push_str(&format!(
        "Starting Balance: {}\n",
        money(plan.starting_balance, symbol)
    ));
    output.push_str(&format!("Months:           {}\n", plan.months()));
    output.push_str(&format!(
        "Total Paid:       {}\n",
        money(plan.total_paid(), symbol)
    ));
    output.push_str(&format!(
        "Total Interest:   {}\n",
        money(plan.total_interest(), symbol)
    ));

    if !plan.payoffs.is_empty() {
        output.push_str("\nPayoff order:\n");
        let name_width = column_width(plan.payoffs.iter().map(|p| p.name.as_str()), 4);
        for (i, payoff) in plan.payoffs.iter().enumerate() {
            let when = match payoff.month {
                Some(0) => "already paid".to_string(),
                Some(month) => format!("month {}", month),
                None => "not paid off".to_string(),
            };
            output.push_str(&format!(
                "  {:>2}. {:<name_width$}  {}\n",
                i + 1,
                payoff.name,
                when,
                name_width = name_width
            ));
        }
    }

    output
}

/// Month-by-month table, one row per debt payment
pub fn format_schedule(plan: &PayoffPlan, symbol: &str) -> String {
    if plan.entries.is_empty() {
        return "No payments needed.\n".to_string();
    }

    let name_width = column_width(
        plan.entries
            .iter()
            .flat_map(|e| e.payments.iter().map(|p| p.name.as_str())),
        4,
    );

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<name_width$}  {:>12}  {:>10}  {:>12}\n",
        "Month",
        "Debt",
        "Payment",
        "Interest",
        "Remaining",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->5}  {:-<name_width$}  {:->12}  {:->10}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for entry in &plan.entries {
        let mut label = Some(entry.month.to_string());
        for payment in &entry.payments {
            // skip debts that were already cleared before this month
            if payment.payment.is_zero() && payment.remaining_balance.is_zero() {
                continue;
            }
            let month = label.take().unwrap_or_default();
            output.push_str(&format!(
                "{:>5}  {:<name_width$}  {:>12}  {:>10}  {:>12}\n",
                month,
                payment.name,
                money(payment.payment, symbol),
                money(payment.interest, symbol),
                money(payment.remaining_balance, symbol),
                name_width = name_width,
            ));
        }
        output.push_str(&format!(
            "{:>5}  {:<name_width$}  {:>12}  {:>10}  {:>12}\n",
            "",
            "(month total)",
            money(entry.month_paid(), symbol),
            "",
            money(entry.remaining_balance(), symbol),
            name_width = name_width,
        ));
    }

    output
}

/// Side-by-side strategy comparison
pub fn format_comparison(summaries: &[StrategySummary], symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:>7}  {:>14}  {:>14}  {}\n",
        "Strategy", "Months", "Total Paid", "Interest", "Status"
    ));
    output.push_str(&format!(
        "{:-<10}  {:->7}  {:->14}  {:->14}  {:-<10}\n",
        "", "", "", "", ""
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:<10}  {:>7}  {:>14}  {:>14}  {}\n",
            summary.strategy.to_string(),
            summary.months,
            money(summary.total_paid, symbol),
            money(summary.total_interest, symbol),
            if summary.completed {
                "debt free"
            } else {
                "horizon reached"
            },
        ));
    }

    let cheapest = summaries
        .iter()
        .filter(|s| s.completed)
        .min_by_key(|s| (s.total_interest, s.months));
    if let Some(best) = cheapest {
        output.push_str(&format!(
            "\n{} pays the least interest ({}).\n",
            best.strategy,
            money(best.total_interest, symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Debt, Money, PayoffStrategy, Reprioritize};
    use crate::services::payoff::{compare_strategies, PayoffSimulator};

    fn debts() -> Vec<Debt> {
        vec![
            Debt::new("Visa", Money::from_cents(10000), 20.0, Money::from_cents(1000)),
            Debt::new("Car", Money::from_cents(50000), 5.0, Money::from_cents(2000)),
        ]
    }

    #[test]
    fn test_format_completed_outcome() {
        let outcome = PayoffSimulator::new(PayoffStrategy::Snowball)
            .run(&debts(), Money::from_dollars(100))
            .unwrap();
        let output = format_outcome(&outcome, "$");

        assert!(output.contains("Snowball"));
        assert!(output.contains("Debt free in"));
        assert!(output.contains("Payoff order:"));
        assert!(output.contains("Visa"));
        assert!(output.contains("month 2"));
        assert!(output.contains("(month total)"));
    }

    #[test]
    fn test_format_insufficient_budget() {
        let outcome = PayoffOutcome::BudgetInsufficient {
            required: Money::from_dollars(30),
            available: Money::from_dollars(20),
        };
        let output = format_outcome(&outcome, "$");
        assert!(output.contains("$30.00"));
        assert!(output.contains("short by $10.00"));
    }

    #[test]
    fn test_format_comparison() {
        let summaries = compare_strategies(
            &debts(),
            Money::from_dollars(100),
            120,
            Reprioritize::Fixed,
        )
        .unwrap();
        let output = format_comparison(&summaries, "$");
        assert!(output.contains("Snowball"));
        assert!(output.contains("Avalanche"));
        assert!(output.contains("pays the least interest"));
    }
}
