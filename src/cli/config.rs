//! `ttm config`: show paths and settings, optionally changing settings

use clap::Args;

use super::{parse_money, parse_strategy};
use crate::config::paths::FinancePaths;
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::services::MAX_HORIZON_MONTHS;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Default monthly budget for `ttm plan`
    #[arg(long)]
    pub budget: Option<String>,

    /// Default payoff strategy
    #[arg(long)]
    pub strategy: Option<String>,

    /// Longest payoff schedule, in months
    #[arg(long)]
    pub horizon: Option<u32>,

    /// Re-evaluate debt priority every month by default
    #[arg(long)]
    pub reprioritize: Option<bool>,

    /// Safe withdrawal rate for FIRE projections, in percent
    #[arg(long)]
    pub withdrawal_rate: Option<f64>,

    /// Currency symbol used in output
    #[arg(long)]
    pub currency: Option<String>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.strategy.is_none()
            && self.horizon.is_none()
            && self.reprioritize.is_none()
            && self.withdrawal_rate.is_none()
            && self.currency.is_none()
    }
}

pub fn handle_config_command(
    paths: &FinancePaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> FinanceResult<()> {
    if !args.is_empty() {
        apply(settings, args)?;
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("ttm-finance Configuration");
    println!("=========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:      {}", settings.currency_symbol);
    println!("  Default strategy:     {}", settings.default_strategy);
    match settings.monthly_budget {
        Some(budget) => println!(
            "  Monthly budget:       {}",
            budget.format_with_symbol(&settings.currency_symbol)
        ),
        None => println!("  Monthly budget:       (not set)"),
    }
    println!("  Payoff horizon:       {} months", settings.payoff_horizon_months);
    println!("  Monthly reprioritize: {}", settings.reprioritize_monthly);
    println!("  Withdrawal rate:      {:.2}%", settings.withdrawal_rate);
    println!("  FIRE horizon:         {} years", settings.fire_horizon_years);

    Ok(())
}

fn apply(settings: &mut Settings, args: ConfigArgs) -> FinanceResult<()> {
    if let Some(budget) = args.budget {
        let budget = parse_money("budget", &budget)?;
        if budget.is_negative() {
            return Err(FinanceError::Validation("Budget cannot be negative".into()));
        }
        settings.monthly_budget = Some(budget);
    }
    if let Some(strategy) = args.strategy {
        settings.default_strategy = parse_strategy(&strategy)?;
    }
    if let Some(horizon) = args.horizon {
        if horizon == 0 || horizon > MAX_HORIZON_MONTHS {
            return Err(FinanceError::Validation(format!(
                "Horizon must be between 1 and {} months",
                MAX_HORIZON_MONTHS
            )));
        }
        settings.payoff_horizon_months = horizon;
    }
    if let Some(reprioritize) = args.reprioritize {
        settings.reprioritize_monthly = reprioritize;
    }
    if let Some(rate) = args.withdrawal_rate {
        if !(rate > 0.0 && rate <= 100.0) {
            return Err(FinanceError::Validation(format!(
                "Withdrawal rate must be between 0 and 100 percent: {}",
                rate
            )));
        }
        settings.withdrawal_rate = rate;
    }
    if let Some(currency) = args.currency {
        settings.currency_symbol = currency;
    }
    Ok(())
}
