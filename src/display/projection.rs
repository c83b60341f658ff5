//! Compound interest and FIRE projection display

use super::format::{format_bar, format_percentage, money};
use crate::services::projection::{CompoundProjection, FireProjection};

pub fn format_compound(projection: &CompoundProjection, symbol: &str) -> String {
    let input = &projection.input;
    let mut output = String::new();

    output.push_str(&format!(
        "Principal:    {}\n",
        money(input.principal, symbol)
    ));
    output.push_str(&format!(
        "Contribution: {} / month\n",
        money(input.monthly_contribution, symbol)
    ));
    output.push_str(&format!("Rate:         {:.2}% / year\n\n", input.annual_rate));

    output.push_str(&format!(
        "{:>4}  {:>15}  {:>15}  {:>15}\n",
        "Year", "Contributed", "Interest", "Balance"
    ));
    output.push_str(&format!("{:->4}  {:->15}  {:->15}  {:->15}\n", "", "", "", ""));

    for year in &projection.years {
        output.push_str(&format!(
            "{:>4}  {:>15}  {:>15}  {:>15}\n",
            year.year,
            money(year.contributions, symbol),
            money(year.interest, symbol),
            money(year.balance, symbol),
        ));
    }

    output.push_str(&format!(
        "\nFinal balance {} after {} years, {} of it interest.\n",
        money(projection.final_balance(), symbol),
        input.years,
        money(projection.total_interest(), symbol)
    ));

    output
}

pub fn format_fire(projection: &FireProjection, symbol: &str) -> String {
    let input = &projection.input;
    let progress = projection.progress_percent();
    let mut output = String::new();

    output.push_str(&format!(
        "Annual Expenses: {}\n",
        money(input.annual_expenses, symbol)
    ));
    output.push_str(&format!(
        "Withdrawal Rate: {:.2}%\n",
        input.withdrawal_rate
    ));
    output.push_str(&format!(
        "FIRE Number:     {}\n",
        money(projection.fire_number, symbol)
    ));
    output.push_str(&format!(
        "Saved So Far:    {} [{}] {}\n\n",
        money(input.current_savings, symbol),
        format_bar(progress, 100.0, 20),
        format_percentage(progress)
    ));

    if !projection.years.is_empty() {
        output.push_str(&format!("{:>4}  {:>15}\n", "Year", "Savings"));
        output.push_str(&format!("{:->4}  {:->15}\n", "", ""));
        for year in &projection.years {
            output.push_str(&format!(
                "{:>4}  {:>15}\n",
                year.year,
                money(year.savings, symbol)
            ));
        }
        output.push('\n');
    }

    match projection.years_to_fire {
        Some(0) => output.push_str("Financially independent today.\n"),
        Some(1) => output.push_str("Financially independent in 1 year.\n"),
        Some(years) => {
            output.push_str(&format!("Financially independent in {} years.\n", years))
        }
        None => output.push_str(&format!(
            "FIRE number not reached within {} years.\n",
            input.horizon_years
        )),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::projection::{project_compound, project_fire, CompoundInput, FireInput};

    #[test]
    fn test_format_compound() {
        let projection = project_compound(CompoundInput {
            principal: Money::from_dollars(1000),
            monthly_contribution: Money::zero(),
            annual_rate: 12.0,
            years: 1,
        })
        .unwrap();
        let output = format_compound(&projection, "$");
        assert!(output.contains("$1126.84"));
        assert!(output.contains("$126.84 of it interest"));
    }

    #[test]
    fn test_format_fire() {
        let projection = project_fire(FireInput {
            annual_expenses: Money::from_dollars(40_000),
            withdrawal_rate: 4.0,
            current_savings: Money::zero(),
            annual_contribution: Money::from_dollars(100_000),
            expected_return: 0.0,
            horizon_years: 100,
        })
        .unwrap();
        let output = format_fire(&projection, "$");
        assert!(output.contains("$1000000.00"));
        assert!(output.contains("in 10 years"));
    }
}
