//! CLI administration tool for the ordering backend.
//!
//! Inspect the menu, recent orders and database health without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Print the menu
//! cargo run --bin admin -- menu
//!
//! # List stored orders
//! cargo run --bin admin -- orders --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `orders` and `db`): PostgreSQL connection string
//! - `DATABASE_NAME` (optional): reported by `db check`

use vrindavan_orders::application::services::order_service::DEFAULT_LIST_LIMIT;
use vrindavan_orders::application::services::{DiagnosticsService, OrderService};
use vrindavan_orders::config;
use vrindavan_orders::domain::entities::{DatabaseStatus, DiagnosticsReport};
use vrindavan_orders::domain::menu::list_menu;
use vrindavan_orders::domain::repositories::DocumentStore;
use vrindavan_orders::server::connect_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for the ordering backend.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Print the menu
    Menu,

    /// List stored orders
    Orders {
        /// Maximum number of orders to show
        #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and list collections
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Menu => print_menu(),
        Commands::Orders { limit } => {
            let (store, _) = open_store().await?;
            let result = list_orders(store.clone(), limit).await;
            store.close().await;
            result?;
        }
        Commands::Db { action } => match action {
            DbAction::Check => {
                let (store, database_name_set) = open_store().await?;
                let service = DiagnosticsService::new(store.clone(), true, database_name_set);
                let report = service.check_health().await;
                store.close().await;
                print_report(&report);
            }
        },
    }

    Ok(())
}

/// Connects the document store from environment configuration.
///
/// Returns the store and whether `DATABASE_NAME` is set.
async fn open_store() -> Result<(Arc<dyn DocumentStore>, bool)> {
    let config = config::load_from_env()?;
    if config.database_url.is_none() {
        anyhow::bail!("DATABASE_URL must be set");
    }

    let store = connect_store(&config).await;
    Ok((store, config.database_name.is_some()))
}

/// Prints the menu grouped in declaration order.
fn print_menu() {
    println!("{}", "🍽  Menu".bright_blue().bold());
    println!();

    for item in list_menu() {
        println!(
            "  {:<34} {:<8} {}",
            item.name.cyan(),
            item.category.bright_black(),
            item.price.to_string().bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        list_menu().len().to_string().bright_white().bold()
    );
    println!();
}

/// Prints stored orders.
async fn list_orders(store: Arc<dyn DocumentStore>, limit: u32) -> Result<()> {
    println!("{}", "🧾 Orders".bright_blue().bold());
    println!();

    let service = OrderService::new(store);
    let orders = service
        .list_orders(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list orders: {}", e))?;

    if orders.is_empty() {
        println!("{}", "  No orders found".yellow());
        println!();
        return Ok(());
    }

    for stored in &orders {
        let items: u32 = stored.order.items.iter().map(|line| line.quantity).sum();

        println!(
            "  {:<38} {:<18} {:>4} items  {}",
            stored.id.bright_black(),
            stored
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            items,
            stored.order.total.to_string().bright_green().bold()
        );
    }

    println!();
    println!(
        "  Total: {}",
        orders.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints a diagnostics report.
fn print_report(report: &DiagnosticsReport) {
    println!("{}", "🔍 Database diagnostics".bright_blue().bold());
    println!();
    println!("  Backend:       {}", report.backend);
    println!("  Database:      {}", report.database);
    println!("  Database URL:  {}", report.database_url);
    println!("  Database name: {}", report.database_name);
    println!("  Connection:    {}", report.connection);

    if !report.collections.is_empty() {
        println!("  Collections:   {}", report.collections.join(", ").cyan());
    }
    println!();

    match report.database {
        DatabaseStatus::Connected => {
            println!("{}", "✅ Database connection OK".green().bold())
        }
        _ => println!("{}", "❌ Database is not working".red().bold()),
    }
}
