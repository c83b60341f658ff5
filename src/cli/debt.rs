//! Debt CLI commands

use clap::Subcommand;

use super::{parse_money, parse_optional_money, position_index};
use crate::config::settings::Settings;
use crate::display::{format_debt_details, format_debt_list};
use crate::error::FinanceResult;
use crate::services::{DebtService, DebtUpdate};
use crate::storage::Storage;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Add a debt
    Add {
        /// Debt name
        name: String,
        /// Outstanding balance (e.g., "1200.00")
        #[arg(short, long)]
        balance: String,
        /// Annual interest rate in percent (e.g., 19.9)
        #[arg(short, long, default_value = "0")]
        rate: f64,
        /// Minimum monthly payment
        #[arg(short, long, default_value = "0")]
        minimum: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List debts in priority order
    List,
    /// Show debt details
    Show {
        /// Debt name or ID
        debt: String,
    },
    /// Edit a debt
    Edit {
        /// Debt name or ID
        debt: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New balance
        #[arg(short, long)]
        balance: Option<String>,
        /// New annual interest rate in percent
        #[arg(short, long)]
        rate: Option<f64>,
        /// New minimum monthly payment
        #[arg(short, long)]
        minimum: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a debt
    #[command(alias = "rm")]
    Remove {
        /// Debt name or ID
        debt: String,
    },
    /// Move a debt to a new position in the list
    Move {
        /// Debt name or ID
        debt: String,
        /// New position, starting at 1
        position: usize,
    },
}

/// Handle a debt command
pub fn handle_debt_command(
    storage: &Storage,
    settings: &Settings,
    cmd: DebtCommands,
) -> FinanceResult<()> {
    let service = DebtService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        DebtCommands::Add {
            name,
            balance,
            rate,
            minimum,
            notes,
        } => {
            let balance = parse_money("balance", &balance)?;
            let minimum = parse_money("minimum payment", &minimum)?;

            let mut debt = service.create(&name, balance, rate, minimum)?;
            if let Some(notes) = notes {
                debt = service.update(
                    debt.id,
                    DebtUpdate {
                        notes: Some(notes),
                        ..Default::default()
                    },
                )?;
            }

            println!("Created debt: {}", debt.name);
            println!("  Balance: {}", debt.balance.format_with_symbol(symbol));
            println!("  Rate: {:.2}%", debt.interest_rate);
            println!(
                "  Minimum Payment: {}",
                debt.minimum_payment.format_with_symbol(symbol)
            );
            println!("  ID: {}", debt.id);
        }

        DebtCommands::List => {
            let debts = service.list()?;
            print!("{}", format_debt_list(&debts, symbol));
        }

        DebtCommands::Show { debt } => {
            let found = service.require(&debt)?;
            print!("{}", format_debt_details(&found, symbol));
        }

        DebtCommands::Edit {
            debt,
            name,
            balance,
            rate,
            minimum,
            notes,
        } => {
            let found = service.require(&debt)?;

            let update = DebtUpdate {
                name,
                balance: parse_optional_money("balance", balance.as_deref())?,
                interest_rate: rate,
                minimum_payment: parse_optional_money("minimum payment", minimum.as_deref())?,
                notes,
            };

            if update.is_empty() {
                println!(
                    "No changes specified. Use --name, --balance, --rate, --minimum or --notes."
                );
                return Ok(());
            }

            let updated = service.update(found.id, update)?;
            println!("Updated debt: {}", updated.name);
        }

        DebtCommands::Remove { debt } => {
            let found = service.require(&debt)?;
            let removed = service.delete(found.id)?;
            println!("Removed debt: {}", removed.name);
        }

        DebtCommands::Move { debt, position } => {
            let found = service.require(&debt)?;
            let debts = service.move_to(found.id, position_index(position)?)?;
            println!("Moved {} to position {}.", found.name, position);
            print!("{}", format_debt_list(&debts, symbol));
        }
    }

    Ok(())
}
