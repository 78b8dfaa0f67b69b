//! Budget CLI commands
//!
//! Implements CLI commands for monthly budget management.

use clap::Subcommand;

use super::{parse_amount, parse_month, CommandContext};
use crate::analytics::{format_currency, format_month};
use crate::display::format_budget_list;
use crate::error::FinsightResult;
use crate::models::MonthKey;
use crate::services::{BudgetService, BudgetUpdate};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a budget for a category
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "300" or "1,200.00")
        amount: String,
        /// Budget month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List budgets
    List {
        /// Only show budgets for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Edit a budget
    Edit {
        /// Budget ID
        id: String,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
    /// Delete every budget
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: BudgetCommands,
) -> FinsightResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Add {
            category,
            amount,
            month,
        } => {
            let month = match month {
                Some(m) => parse_month(&m)?,
                None => MonthKey::from_date(ctx.today),
            };

            let budget = service.create(&category, month, parse_amount(&amount)?)?;
            println!(
                "Set budget {} for {} in {}: {}",
                budget.id,
                budget.category,
                format_month(&budget.month.to_string()),
                format_currency(budget.amount.value(), ctx.currency)
            );
        }

        BudgetCommands::List { month } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let budgets = service.list(month)?;
            println!("{}", format_budget_list(&budgets, ctx.currency));
        }

        BudgetCommands::Edit {
            id,
            category,
            amount,
            month,
        } => {
            let update = BudgetUpdate {
                category,
                month: month.as_deref().map(parse_month).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
            };

            let budget = service.update(&id, update)?;
            println!(
                "Updated budget {}: {} in {}: {}",
                budget.id,
                budget.category,
                format_month(&budget.month.to_string()),
                format_currency(budget.amount.value(), ctx.currency)
            );
        }

        BudgetCommands::Delete { id } => {
            let budget = service.delete(&id)?;
            println!(
                "Deleted budget {} ({} in {})",
                budget.id,
                budget.category,
                budget.month
            );
        }

        BudgetCommands::Clear { force } => {
            if !force {
                let count = service.list(None)?.len();
                println!(
                    "This will delete all {} budgets. Re-run with --force to confirm.",
                    count
                );
                return Ok(());
            }

            let count = service.delete_all()?;
            println!("Deleted {} budgets.", count);
        }
    }

    Ok(())
}
