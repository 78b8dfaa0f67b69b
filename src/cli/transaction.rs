//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use std::path::PathBuf;

use clap::Subcommand;

use super::{create_export_file, parse_amount, parse_date, parse_kind, CommandContext};
use crate::analytics::format_currency;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::FinsightResult;
use crate::export::export_transactions_csv;
use crate::services::{NewTransaction, TransactionService, TransactionUpdate};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount, always positive (e.g., "50" or "1,250.00")
        amount: String,
        /// Category name
        category: String,
        /// Description
        description: String,
        /// Transaction type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every transaction
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
        /// Export the listed transactions to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: TransactionCommands,
) -> FinsightResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            description,
            kind,
            date,
        } => {
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => ctx.today,
            };

            let txn = service.create(NewTransaction {
                amount: parse_amount(&amount)?,
                date,
                category,
                kind: parse_kind(&kind)?,
                description,
            })?;

            println!("Created transaction:");
            println!("  ID:          {}", txn.id);
            println!("  Date:        {}", txn.date);
            println!("  Type:        {}", txn.kind);
            println!(
                "  Amount:      {}",
                format_currency(txn.amount.value(), ctx.currency)
            );
            println!("  Category:    {}", txn.category);
            println!("  Description: {}", txn.description);
        }

        TransactionCommands::List { limit, all, output } => {
            let limit = if all {
                None
            } else {
                Some(limit.unwrap_or(ctx.recent_limit))
            };
            let transactions = service.list(limit)?;

            if let Some(path) = output {
                export_transactions_csv(&transactions, create_export_file(&path)?)?;
                println!(
                    "Exported {} transactions to: {}",
                    transactions.len(),
                    path.display()
                );
            } else {
                println!(
                    "{}",
                    format_transaction_register(&transactions, ctx.currency)
                );
                println!("\nShowing {} transactions", transactions.len());
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, ctx.currency));
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let update = TransactionUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                category,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                description,
            };

            if update.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let txn = service.update(&id, update)?;
            println!("Updated transaction:");
            print!("{}", format_transaction_details(&txn, ctx.currency));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!(
                "Deleted transaction {} ({} {} on {})",
                txn.id,
                txn.category,
                format_currency(txn.amount.value(), ctx.currency),
                txn.date
            );
        }

        TransactionCommands::Clear { force } => {
            if !force {
                let count = service.all()?.len();
                println!(
                    "This will delete all {} transactions. Re-run with --force to confirm.",
                    count
                );
                return Ok(());
            }

            let count = service.delete_all()?;
            println!("Deleted {} transactions.", count);
        }
    }

    Ok(())
}
