//! Shared formatting helpers for terminal output

use crate::models::Money;

/// Format an amount with the configured currency symbol
pub fn money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A fixed-width progress bar
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Months as "N years M months"
pub fn format_duration(months: u32) -> String {
    let years = months / 12;
    let rest = months % 12;
    let plural = |n: u32, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    match (years, rest) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{}, {}", plural(y, "year"), plural(m, "month")),
    }
}

/// Width of the widest string, never narrower than `min`
pub fn column_width<'a>(values: impl IntoIterator<Item = &'a str>, min: usize) -> usize {
    values
        .into_iter()
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(min)
        .max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.27), "5.3%");
        assert_eq!(format_percentage(42.4), "42%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1), "1 month");
        assert_eq!(format_duration(24), "2 years");
        assert_eq!(format_duration(14), "1 year, 2 months");
    }

    #[test]
    fn test_money_uses_symbol() {
        assert_eq!(money(Money::from_cents(123456), "€"), "€1234.56");
    }
}
