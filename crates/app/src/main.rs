use std::io::Write;

use api_types::expense::{Category, Filter};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ledger::ExpenseStore;
use sync_client::{CreateError, SyncClient, SyncError};

use crate::error::Result;

mod error;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "splitmint")]
#[command(about = "Personal expense ledger synchronized with a remote store")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the expense service base URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the expense list for a filter.
    List(FilterArgs),
    /// Record a new expense, then print the refreshed list.
    Add(AddArgs),
    /// Delete an expense by id, then print the refreshed list.
    Remove(RemoveArgs),
    /// Fetch and print only the running total.
    Total(FilterArgs),
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Restrict to one category (Food, Travel, Shopping, Bills, Others).
    #[arg(long)]
    category: Option<Category>,
}

impl FilterArgs {
    fn filter(&self) -> Filter {
        self.category.map_or(Filter::All, Filter::Category)
    }
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Amount in rupees, e.g. 45.00 (sent to the backend as integer paise).
    #[arg(long)]
    amount: String,
    /// Expense category.
    #[arg(long)]
    category: Category,
    /// Calendar date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct RemoveArgs {
    /// Backend-assigned expense id.
    id: i64,
    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings::load(cli.config.as_deref(), cli.base_url)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "splitmint={level},sync_client={level}",
            level = settings.level
        ))
        .init();

    tracing::debug!("using expense service at {}", settings.base_url);
    let mut client = SyncClient::new(&settings.base_url);

    match cli.command {
        Command::List(args) => {
            refresh_or_exit(&mut client, args.filter()).await;
            print_expenses(client.store());
        }
        Command::Total(args) => {
            refresh_or_exit(&mut client, args.filter()).await;
            println!("Total spent: ₹{}", client.store().total());
        }
        Command::Add(args) => {
            match client.create(&args.amount, args.category, args.date).await {
                Ok(()) => print_expenses(client.store()),
                Err(CreateError::Parse(err)) => {
                    eprintln!("invalid amount: {err}");
                    std::process::exit(2);
                }
                Err(CreateError::Sync(err)) => {
                    eprintln!("could not save expense: {err}");
                    std::process::exit(1);
                }
            }
        }
        Command::Remove(args) => {
            if !args.yes && !confirm("Delete this entry?")? {
                return Ok(());
            }
            match client.remove(args.id).await {
                Ok(()) => print_expenses(client.store()),
                Err(err) => {
                    eprintln!("could not delete expense: {err}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

async fn refresh_or_exit(client: &mut SyncClient, filter: Filter) {
    if let Err(err) = client.refresh(filter).await {
        match err {
            SyncError::Transport(err) => eprintln!("server not reachable: {err}"),
            SyncError::Server { status, message } => {
                eprintln!("server error ({status}): {message}")
            }
        }
        std::process::exit(1);
    }
}

fn print_expenses(store: &ExpenseStore) {
    if store.is_empty() {
        println!("No expenses found for this category.");
        return;
    }

    println!("{:<6} {:<12} {:<10} {:>14}", "ID", "DATE", "CATEGORY", "AMOUNT");
    for record in store.records() {
        println!(
            "{:<6} {:<12} {:<10} {:>14}",
            record.id,
            record.date.to_string(),
            record.category.as_str(),
            format!("₹{}", record.amount),
        );
    }
    println!();
    println!("Total spent: ₹{}", store.total());
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
