//! `ttm plan`: run the payoff simulator over the stored debts

use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use super::{parse_optional_money, parse_strategy};
use crate::config::settings::Settings;
use crate::display::{format_comparison, format_outcome};
use crate::error::{FinanceError, FinanceResult};
use crate::export::{
    export_comparison_csv, export_plan_csv, export_plan_json, export_plan_yaml, PlanExport,
};
use crate::models::{PayoffOutcome, Reprioritize};
use crate::services::{compare_strategies, DebtService, PayoffSimulator};
use crate::storage::{write_atomic, Storage};

/// Output format for plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text tables
    Table,
    /// One row per debt per month
    Csv,
    Json,
    Yaml,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Monthly budget for debt payments (defaults to the configured budget)
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Payoff strategy: snowball or avalanche
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Longest schedule to simulate, in months
    #[arg(long)]
    pub horizon: Option<u32>,

    /// Re-evaluate debt priority every month
    #[arg(long)]
    pub reprioritize: bool,

    /// Compare every strategy instead of showing one schedule
    #[arg(short, long)]
    pub compare: bool,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_plan_command(storage: &Storage, settings: &Settings, args: PlanArgs) -> FinanceResult<()> {
    let service = DebtService::new(storage);
    let debts = service.list()?;
    if debts.is_empty() {
        println!("No debts found. Add one with 'ttm debt add'.");
        return Ok(());
    }

    let budget = parse_optional_money("budget", args.budget.as_deref())?
        .or(settings.monthly_budget)
        .ok_or_else(|| {
            FinanceError::Validation(
                "No monthly budget given. Pass --budget or set one with 'ttm config --budget'."
                    .into(),
            )
        })?;
    let strategy = match args.strategy.as_deref() {
        Some(s) => parse_strategy(s)?,
        None => settings.default_strategy,
    };
    let horizon = args.horizon.unwrap_or(settings.payoff_horizon_months);
    let reprioritize = if args.reprioritize {
        Reprioritize::Monthly
    } else {
        settings.reprioritize()
    };
    let symbol = settings.currency_symbol.as_str();

    // Render fully before touching the output file so a failed run leaves it intact
    let mut out: Vec<u8> = Vec::new();

    if args.compare {
        let summaries = compare_strategies(&debts, budget, horizon, reprioritize)?;
        match args.format {
            OutputFormat::Table => write_text(&mut out, &format_comparison(&summaries, symbol))?,
            OutputFormat::Csv => export_comparison_csv(&summaries, &mut out)?,
            OutputFormat::Json => {
                export_plan_json(&PlanExport::new(debts).with_comparison(summaries), &mut out)?
            }
            OutputFormat::Yaml => {
                export_plan_yaml(&PlanExport::new(debts).with_comparison(summaries), &mut out)?
            }
        }
    } else {
        let simulator = PayoffSimulator::new(strategy)
            .with_horizon(horizon)
            .with_reprioritize(reprioritize);
        let outcome = service.plan(budget, &simulator)?;

        if let PayoffOutcome::BudgetInsufficient { required, available } = outcome {
            return Err(FinanceError::Simulation(format!(
                "Budget of {} does not cover the minimum payments of {}",
                available.format_with_symbol(symbol),
                required.format_with_symbol(symbol)
            )));
        }

        match args.format {
            OutputFormat::Table => write_text(&mut out, &format_outcome(&outcome, symbol))?,
            OutputFormat::Csv => {
                if let Some(plan) = outcome.plan() {
                    export_plan_csv(plan, &mut out)?;
                }
            }
            OutputFormat::Json => {
                export_plan_json(&PlanExport::new(debts).with_outcome(outcome), &mut out)?
            }
            OutputFormat::Yaml => {
                export_plan_yaml(&PlanExport::new(debts).with_outcome(outcome), &mut out)?
            }
        }
    }

    match &args.output {
        Some(path) => {
            write_atomic(path, &out)?;
            eprintln!("Wrote plan to {}", path.display());
        }
        None => io::stdout()
            .lock()
            .write_all(&out)
            .map_err(|e| FinanceError::Export(e.to_string()))?,
    }

    Ok(())
}

fn write_text(out: &mut dyn Write, text: &str) -> FinanceResult<()> {
    out.write_all(text.as_bytes())
        .map_err(|e| FinanceError::Export(e.to_string()))
}
