//! Savings goal CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_money, parse_optional_money, position_index};
use crate::config::settings::Settings;
use crate::display::{format_goal_details, format_goal_list};
use crate::error::FinanceResult;
use crate::services::goal::today;
use crate::services::{GoalService, GoalUpdate};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Amount to save
        #[arg(short, long)]
        target: String,
        /// Amount already saved
        #[arg(short, long, default_value = "0")]
        saved: String,
        /// Planned monthly contribution
        #[arg(short, long, default_value = "0")]
        monthly: String,
        /// Date to reach the target by (YYYY-MM-DD)
        #[arg(short, long)]
        by: Option<NaiveDate>,
    },
    /// List goals with progress
    List,
    /// Show goal details
    Show {
        /// Goal name or ID
        goal: String,
    },
    /// Edit a goal
    Edit {
        /// Goal name or ID
        goal: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        target: Option<String>,
        #[arg(short, long)]
        monthly: Option<String>,
        /// New target date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "no_date")]
        by: Option<NaiveDate>,
        /// Remove the target date
        #[arg(long)]
        no_date: bool,
    },
    /// Add money to a goal
    Deposit {
        /// Goal name or ID
        goal: String,
        /// Amount deposited
        amount: String,
    },
    /// Remove a goal
    #[command(alias = "rm")]
    Remove {
        /// Goal name or ID
        goal: String,
    },
    /// Move a goal to a new position in the list
    Move {
        /// Goal name or ID
        goal: String,
        /// New position, starting at 1
        position: usize,
    },
}

pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            saved,
            monthly,
            by,
        } => {
            let goal = service.create(
                &name,
                parse_money("target", &target)?,
                parse_money("saved amount", &saved)?,
                parse_money("monthly contribution", &monthly)?,
                by,
            )?;

            println!("Created goal: {}", goal.name);
            println!("  Target: {}", goal.target.format_with_symbol(symbol));
            println!("  Saved: {}", goal.saved.format_with_symbol(symbol));
            println!("  ID: {}", goal.id);
        }

        GoalCommands::List => {
            let summaries = service.summaries(today())?;
            print!("{}", format_goal_list(&summaries, symbol));
        }

        GoalCommands::Show { goal } => {
            let found = service.require(&goal)?;
            print!("{}", format_goal_details(&service.summary(found), symbol));
        }

        GoalCommands::Edit {
            goal,
            name,
            target,
            monthly,
            by,
            no_date,
        } => {
            let found = service.require(&goal)?;

            let update = GoalUpdate {
                name,
                target: parse_optional_money("target", target.as_deref())?,
                monthly_contribution: parse_optional_money(
                    "monthly contribution",
                    monthly.as_deref(),
                )?,
                target_date: if no_date { Some(None) } else { by.map(Some) },
            };

            if update.is_empty() {
                println!("No changes specified. Use --name, --target, --monthly, --by or --no-date.");
                return Ok(());
            }

            let updated = service.update(found.id, update)?;
            println!("Updated goal: {}", updated.name);
        }

        GoalCommands::Deposit { goal, amount } => {
            let found = service.require(&goal)?;
            let amount = parse_money("amount", &amount)?;
            let summary = service.summary(service.deposit(found.id, amount)?);

            println!(
                "Deposited {} into {}: {} of {} saved.",
                amount.format_with_symbol(symbol),
                summary.goal.name,
                summary.goal.saved.format_with_symbol(symbol),
                summary.goal.target.format_with_symbol(symbol)
            );
            if summary.goal.is_complete() {
                println!("Goal reached!");
            }
        }

        GoalCommands::Remove { goal } => {
            let found = service.require(&goal)?;
            let removed = service.delete(found.id)?;
            println!("Removed goal: {}", removed.name);
        }

        GoalCommands::Move { goal, position } => {
            let found = service.require(&goal)?;
            service.move_to(found.id, position_index(position)?)?;
            println!("Moved {} to position {}.", found.name, position);
            print!("{}", format_goal_list(&service.summaries(today())?, symbol));
        }
    }

    Ok(())
}
