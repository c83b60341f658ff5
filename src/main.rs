use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ttm_finance::cli::{
    handle_audit_command, handle_config_command, handle_debt_command, handle_goal_command,
    handle_plan_command, handle_project_command, ConfigArgs, DebtCommands, GoalCommands, PlanArgs,
    ProjectCommands,
};
use ttm_finance::config::{paths::FinancePaths, settings::Settings};
use ttm_finance::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "TTM_LOG";

#[derive(Parser)]
#[command(
    name = "ttm",
    author = "Top Tier Men",
    version,
    about = "Debt payoff, savings goal and FIRE planner",
    long_about = "ttm plans your way out of debt with the snowball or avalanche \
                  method, tracks savings goals, and projects compound growth \
                  and financial independence from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Debt management commands
    #[command(subcommand)]
    Debt(DebtCommands),

    /// Simulate paying off every debt
    Plan(PlanArgs),

    /// Compound interest and FIRE projections
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory and default settings
    Init,

    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Debt(cmd)) => handle_debt_command(&storage, &settings, cmd)?,
        Some(Commands::Plan(args)) => handle_plan_command(&storage, &settings, args)?,
        Some(Commands::Project(cmd)) => handle_project_command(&settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }
            println!("Initializing ttm-finance at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  ttm debt add \"Visa\" --balance 1200 --rate 19.9 --minimum 35");
            println!("  ttm plan --budget 500");
        }
        Some(Commands::Config(args)) => handle_config_command(&paths, &mut settings, args)?,
        None => {
            println!("ttm - debt payoff, savings goal and FIRE planner");
            println!();
            println!("Run 'ttm --help' for usage information.");
        }
    }

    Ok(())
}
