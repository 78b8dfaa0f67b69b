//! CLI commands for reports
//!
//! Provides commands for viewing and exporting the spending analytics.

use std::path::PathBuf;

use clap::Subcommand;

use super::{create_export_file, parse_month, CommandContext};
use crate::analytics::{
    budget_comparison, budget_status, category_summary, find_month_option, format_month,
    month_options, monthly_summary, DashboardSummary, CURRENT_MONTH_VALUE,
};
use crate::display::{
    format_budget_comparison_table, format_budget_status_table, format_category_table,
    format_dashboard, format_month_options_table, format_monthly_table,
};
use crate::error::FinsightResult;
use crate::export::{export_category_summary_csv, export_monthly_summary_csv};
use crate::models::{MonthKey, Transaction};
use crate::services::{BudgetService, TransactionService};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending by category
    #[command(alias = "spending")]
    Categories {
        /// Reporting window: "current", "all" or a month (YYYY-MM)
        #[arg(short, long, default_value = CURRENT_MONTH_VALUE)]
        period: String,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income and expenses per month
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budgets against actual spending for a month
    Budget {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the selectable reporting windows
    Periods,

    /// Overview of the current month
    Dashboard,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: ReportCommands,
) -> FinsightResult<()> {
    match cmd {
        ReportCommands::Categories { period, output } => {
            handle_category_report(storage, ctx, &period, output)
        }
        ReportCommands::Monthly { output } => handle_monthly_report(storage, ctx, output),
        ReportCommands::Budget { month } => handle_budget_report(storage, ctx, month),
        ReportCommands::Periods => {
            println!("{}", format_month_options_table(&month_options(ctx.today)));
            Ok(())
        }
        ReportCommands::Dashboard => {
            let transactions = TransactionService::new(storage).all()?;
            let budgets = BudgetService::new(storage).list(None)?;
            let summary = DashboardSummary::generate(&transactions, &budgets, ctx.today);
            print!("{}", format_dashboard(&summary, ctx.currency));
            Ok(())
        }
    }
}

/// Select the transactions inside a named window or a `YYYY-MM` month
fn select_period<'a>(
    transactions: &'a [Transaction],
    period: &str,
    ctx: &CommandContext,
) -> FinsightResult<(String, Vec<&'a Transaction>)> {
    let options = month_options(ctx.today);

    if let Some(option) = find_month_option(&options, period.trim()) {
        return Ok((option.label.clone(), option.filter(transactions).collect()));
    }

    let month = parse_month(period)?;
    let selected = transactions
        .iter()
        .filter(|t| month.contains(t.date))
        .collect();
    Ok((format_month(&month.to_string()), selected))
}

/// Handle the spending-by-category report
fn handle_category_report(
    storage: &Storage,
    ctx: &CommandContext,
    period: &str,
    output: Option<PathBuf>,
) -> FinsightResult<()> {
    let transactions = TransactionService::new(storage).all()?;
    let (label, selected) = select_period(&transactions, period, ctx)?;
    let summaries = category_summary(selected);

    if let Some(path) = output {
        export_category_summary_csv(&summaries, create_export_file(&path)?)?;
        println!("Category report exported to: {}", path.display());
    } else {
        println!("Spending by category: {}\n", label);
        println!("{}", format_category_table(&summaries, ctx.currency));
    }

    Ok(())
}

/// Handle the monthly trend report
fn handle_monthly_report(
    storage: &Storage,
    ctx: &CommandContext,
    output: Option<PathBuf>,
) -> FinsightResult<()> {
    let transactions = TransactionService::new(storage).all()?;
    let summaries = monthly_summary(&transactions);

    if let Some(path) = output {
        export_monthly_summary_csv(&summaries, create_export_file(&path)?)?;
        println!("Monthly report exported to: {}", path.display());
    } else {
        println!("Monthly summary\n");
        println!("{}", format_monthly_table(&summaries, ctx.currency));
    }

    Ok(())
}

/// Handle the budget versus actual report
fn handle_budget_report(
    storage: &Storage,
    ctx: &CommandContext,
    month: Option<String>,
) -> FinsightResult<()> {
    let month = match month {
        Some(m) => parse_month(&m)?,
        None => MonthKey::from_date(ctx.today),
    };

    let transactions = TransactionService::new(storage).all()?;
    let budgets = BudgetService::new(storage).list(Some(month))?;
    let actual = category_summary(transactions.iter().filter(|t| month.contains(t.date)));

    println!("Budget status: {}\n", format_month(&month.to_string()));
    println!(
        "{}",
        format_budget_status_table(&budget_status(&budgets, &actual, month), ctx.currency)
    );
    println!("\nBudget vs actual\n");
    println!(
        "{}",
        format_budget_comparison_table(&budget_comparison(&budgets, &actual), ctx.currency)
    );

    Ok(())
}
