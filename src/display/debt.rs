//! Debt display formatting
//!
//! Formats stored debts for terminal output in table and detail views.

use super::format::{column_width, money};
use crate::models::Debt;

/// Format debts in priority order as a table with a totals row
pub fn format_debt_list(debts: &[Debt], symbol: &str) -> String {
    if debts.is_empty() {
        return "No debts found.".to_string();
    }

    let name_width = column_width(debts.iter().map(|d| d.name.as_str()), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>12}  {:>7}  {:>10}  {}\n",
        "#",
        "Name",
        "Balance",
        "Rate",
        "Minimum",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->12}  {:->7}  {:->10}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (position, debt) in debts.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>12}  {:>6.2}%  {:>10}  {}\n",
            position + 1,
            debt.name,
            money(debt.balance, symbol),
            debt.interest_rate,
            money(debt.minimum_payment, symbol),
            debt.id,
            name_width = name_width,
        ));
    }

    let total_balance: crate::models::Money = debts.iter().map(|d| d.balance).sum();
    let total_minimum: crate::models::Money = debts.iter().map(|d| d.minimum_payment).sum();

    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->12}  {:->7}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>12}  {:>7}  {:>10}\n",
        "",
        "TOTAL",
        money(total_balance, symbol),
        "",
        money(total_minimum, symbol),
        name_width = name_width,
    ));

    output
}

/// Format a single debt's details
pub fn format_debt_details(debt: &Debt, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Debt: {}\n", debt.name));
    output.push_str(&format!("  ID:               {}\n", debt.id));
    output.push_str(&format!("  Position:         {}\n", debt.sort_order + 1));
    output.push('\n');
    output.push_str(&format!(
        "  Balance:          {}\n",
        money(debt.balance, symbol)
    ));
    output.push_str(&format!("  Interest Rate:    {:.2}%\n", debt.interest_rate));
    output.push_str(&format!(
        "  Minimum Payment:  {}\n",
        money(debt.minimum_payment, symbol)
    ));
    output.push_str(&format!(
        "  Monthly Interest: {}\n",
        money(debt.monthly_interest(), symbol)
    ));

    if debt.is_paid_off() {
        output.push_str("  Status:           Paid off\n");
    }

    if !debt.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", debt.notes));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        debt.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        debt.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn debt(name: &str, balance: i64, rate: f64, minimum: i64) -> Debt {
        Debt::new(
            name,
            Money::from_dollars(balance),
            rate,
            Money::from_dollars(minimum),
        )
    }

    #[test]
    fn test_format_debt_list() {
        let debts = vec![debt("Visa", 1200, 19.9, 35), debt("Car Loan", 8000, 4.5, 250)];
        let output = format_debt_list(&debts, "$");

        assert!(output.contains("Visa"));
        assert!(output.contains("Car Loan"));
        assert!(output.contains("19.90%"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$9200.00"));
        assert!(output.contains("$285.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_debt_list(&[], "$").contains("No debts found"));
    }

    #[test]
    fn test_format_debt_details() {
        let mut d = debt("Student Loan", 15000, 5.0, 150);
        d.notes = "federal".into();
        let output = format_debt_details(&d, "£");

        assert!(output.contains("Student Loan"));
        assert!(output.contains("£15000.00"));
        assert!(output.contains("£62.50"));
        assert!(output.contains("Notes: federal"));
    }
}
