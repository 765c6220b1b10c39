use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_ledger::{
    initialize_db,
    models::CategoryName,
    stores::{CategoryStore, ExpenseStore, SQLiteCategoryStore, SQLiteExpenseStore},
};

/// A utility for creating a test database for the expense ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    tracing::info!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;
    initialize_db(&connection)?;

    let connection = Arc::new(Mutex::new(connection));
    let category_store = SQLiteCategoryStore::new(connection.clone());
    let expense_store = SQLiteExpenseStore::new(connection);

    tracing::info!("Creating test categories...");
    let categories = ["Food", "Transport", "Utilities", "Rent", "Shopping"]
        .into_iter()
        .map(|name| category_store.create(CategoryName::new_unchecked(name)))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Creating test expenses...");
    expense_store.record(12.40, categories[0].id, Some("Lunch"))?;
    expense_store.record(3.50, categories[1].id, Some("Bus fare"))?;
    expense_store.record(86.20, categories[2].id, Some("Power bill"))?;
    expense_store.record(450.00, categories[3].id, None)?;

    tracing::info!("Success!");

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}
