//! Savings goal display formatting

use super::format::{column_width, format_bar, format_percentage, money};
use crate::services::goal::GoalSummary;

pub fn format_goal_list(summaries: &[GoalSummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No savings goals found.".to_string();
    }

    let name_width = column_width(summaries.iter().map(|s| s.goal.name.as_str()), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>12}  {:>12}  {:<12}  {:>5}  {}\n",
        "#",
        "Name",
        "Saved",
        "Target",
        "Progress",
        "",
        "ETA",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->12}  {:->12}  {:-<12}  {:->5}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (position, summary) in summaries.iter().enumerate() {
        let goal = &summary.goal;
        let progress = &summary.progress;
        let eta = match progress.months_to_target {
            Some(0) => "done".to_string(),
            Some(months) => format!("{} mo", months),
            None => "-".to_string(),
        };

        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>12}  {:>12}  {}  {:>5}  {}\n",
            position + 1,
            goal.name,
            money(goal.saved, symbol),
            money(goal.target, symbol),
            format_bar(progress.percent, 100.0, 12),
            format_percentage(progress.percent),
            eta,
            name_width = name_width,
        ));
    }

    output
}

pub fn format_goal_details(summary: &GoalSummary, symbol: &str) -> String {
    let goal = &summary.goal;
    let progress = &summary.progress;
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    output.push_str(&format!("  ID:           {}\n", goal.id));
    output.push_str(&format!("  Position:     {}\n", goal.sort_order + 1));
    output.push('\n');
    output.push_str(&format!("  Target:       {}\n", money(goal.target, symbol)));
    output.push_str(&format!("  Saved:        {}\n", money(goal.saved, symbol)));
    output.push_str(&format!(
        "  Remaining:    {}\n",
        money(progress.remaining, symbol)
    ));
    output.push_str(&format!(
        "  Progress:     [{}] {}\n",
        format_bar(progress.percent, 100.0, 20),
        format_percentage(progress.percent)
    ));
    output.push_str(&format!(
        "  Contribution: {} / month\n",
        money(goal.monthly_contribution, symbol)
    ));

    match progress.months_to_target {
        Some(0) => output.push_str("  Status:       Complete\n"),
        Some(months) => output.push_str(&format!("  Months Left:  {}\n", months)),
        None => output.push_str("  Months Left:  never at the current contribution\n"),
    }

    if let (Some(date), Some(required)) = (goal.target_date, progress.required_monthly) {
        output.push('\n');
        output.push_str(&format!("  Target Date:  {}\n", date));
        output.push_str(&format!(
            "  Needed:       {} / month\n",
            money(required, symbol)
        ));
        if let Some(on_track) = progress.on_track {
            output.push_str(&format!(
                "  On Track:     {}\n",
                if on_track { "Yes" } else { "No" }
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsGoal};
    use chrono::NaiveDate;

    fn summary(name: &str, target: i64, saved: i64, monthly: i64) -> GoalSummary {
        let mut goal = SavingsGoal::new(name, Money::from_dollars(target));
        goal.saved = Money::from_dollars(saved);
        goal.monthly_contribution = Money::from_dollars(monthly);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        GoalSummary {
            progress: goal.progress(today),
            goal,
        }
    }

    #[test]
    fn test_format_goal_list() {
        let output = format_goal_list(
            &[summary("Emergency", 1000, 500, 100), summary("Car", 5000, 0, 0)],
            "$",
        );
        assert!(output.contains("Emergency"));
        assert!(output.contains("50%"));
        assert!(output.contains("5 mo"));
        assert!(output.contains("$5000.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_goal_list(&[], "$").contains("No savings goals"));
    }

    #[test]
    fn test_format_goal_details() {
        let output = format_goal_details(&summary("House", 2000, 2000, 0), "$");
        assert!(output.contains("Goal: House"));
        assert!(output.contains("Complete"));
    }
}
