//! `ttm project`: compound growth and FIRE projections

use clap::Subcommand;

use super::{parse_money, OutputFormat};
use crate::config::settings::Settings;
use crate::display::{format_compound, format_fire};
use crate::error::{FinanceError, FinanceResult};
use crate::services::{project_compound, project_fire, CompoundInput, FireInput};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Grow a balance with monthly contributions and compound interest
    Compound {
        /// Starting balance
        #[arg(short, long, default_value = "0")]
        principal: String,
        /// Amount added every month
        #[arg(short, long, default_value = "0")]
        contribution: String,
        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: f64,
        /// Number of years to project
        #[arg(short, long, default_value = "10")]
        years: u32,
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Years until savings cover annual expenses at a safe withdrawal rate
    Fire {
        /// Annual living expenses
        #[arg(short, long)]
        expenses: String,
        /// Current invested savings
        #[arg(short, long, default_value = "0")]
        savings: String,
        /// Amount invested every year
        #[arg(short, long, default_value = "0")]
        contribution: String,
        /// Expected annual return in percent
        #[arg(short = 'r', long = "return", default_value = "7")]
        expected_return: f64,
        /// Safe withdrawal rate in percent (defaults to the configured rate)
        #[arg(short, long)]
        withdrawal_rate: Option<f64>,
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

pub fn handle_project_command(settings: &Settings, cmd: ProjectCommands) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ProjectCommands::Compound {
            principal,
            contribution,
            rate,
            years,
            format,
        } => {
            let projection = project_compound(CompoundInput {
                principal: parse_money("principal", &principal)?,
                monthly_contribution: parse_money("contribution", &contribution)?,
                annual_rate: rate,
                years,
            })?;

            match format {
                OutputFormat::Table => print!("{}", format_compound(&projection, symbol)),
                other => print_structured(&projection, other)?,
            }
        }

        ProjectCommands::Fire {
            expenses,
            savings,
            contribution,
            expected_return,
            withdrawal_rate,
            format,
        } => {
            let projection = project_fire(FireInput {
                annual_expenses: parse_money("expenses", &expenses)?,
                withdrawal_rate: withdrawal_rate.unwrap_or(settings.withdrawal_rate),
                current_savings: parse_money("savings", &savings)?,
                annual_contribution: parse_money("contribution", &contribution)?,
                expected_return,
                horizon_years: settings.fire_horizon_years,
            })?;

            match format {
                OutputFormat::Table => print!("{}", format_fire(&projection, symbol)),
                other => print_structured(&projection, other)?,
            }
        }
    }

    Ok(())
}

fn print_structured<T: serde::Serialize>(value: &T, format: OutputFormat) -> FinanceResult<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| FinanceError::Export(e.to_string()))?,
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| FinanceError::Export(e.to_string()))?
        }
        OutputFormat::Table | OutputFormat::Csv => {
            return Err(FinanceError::Validation(
                "Projections can be printed as table, json or yaml".into(),
            ))
        }
    };
    println!("{}", text.trim_end());
    Ok(())
}
