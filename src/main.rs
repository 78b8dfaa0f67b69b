use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finsight::analytics::CurrencyFormat;
use finsight::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, parse_date,
    BudgetCommands, CommandContext, ReportCommands, TransactionCommands,
};
use finsight::config::{paths::FinsightPaths, settings::Settings};
use finsight::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Track income, expenses and monthly budgets from the terminal",
    long_about = "finsight records income and expense transactions and monthly \
                  category budgets, and reports spending per category, income \
                  and expenses per month, and how each budget is holding up."
)]
struct Cli {
    /// Currency used to display amounts (usd or inr)
    #[arg(long, global = true, env = "FINSIGHT_CURRENCY")]
    currency: Option<CurrencyFormat>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, env = "FINSIGHT_TODAY", hide = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths, optionally changing settings
    Config {
        /// Save a new default currency (usd or inr)
        #[arg(long, value_name = "CURRENCY")]
        set_currency: Option<CurrencyFormat>,

        /// Save a new default number of rows for `transaction list`
        #[arg(long, value_name = "N")]
        set_recent_limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = FinsightPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)
        .with_context(|| format!("Loading {}", paths.settings_file().display()))?;

    let ctx = CommandContext {
        currency: cli.currency.unwrap_or(settings.currency),
        today: cli
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        recent_limit: settings.recent_limit,
    };
    debug!(currency = %ctx.currency, today = %ctx.today, base = %paths.base_dir().display(), "starting");

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &ctx, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &ctx, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &ctx, cmd)?,
        Some(Commands::Config {
            set_currency,
            set_recent_limit,
        }) => {
            if set_currency.is_some() || set_recent_limit.is_some() {
                if let Some(currency) = set_currency {
                    settings.currency = currency;
                }
                if let Some(limit) = set_recent_limit {
                    settings.recent_limit = limit;
                }
                settings.save(&paths)?;
                info!(currency = %settings.currency, recent_limit = settings.recent_limit, "settings saved");
                println!("Settings saved.");
                println!();
            }

            println!("finsight configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency:        {} ({})",
                settings.currency,
                settings.currency.locale()
            );
            println!("  Recent limit:    {}", settings.recent_limit);
            if let Some(active) = cli.currency.filter(|c| *c != settings.currency) {
                println!("  Active currency: {} (overridden)", active);
            }
        }
        None => {
            println!("finsight - personal finance tracking");
            println!();
            println!("Run 'finsight --help' for usage information.");
            println!("Run 'finsight report dashboard' for an overview of this month.");
        }
    }

    Ok(())
}
