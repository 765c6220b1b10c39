//! Database schema creation.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::Error;

/// Initialize the database by adding the tables for the domain models.
///
/// All tables are created within a single SQL transaction so the schema is
/// either fully applied or not at all. Safe to call on an already
/// initialized database.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Foreign keys are enforced per connection, not per database file.
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    transaction.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL COLLATE NOCASE UNIQUE
        );

        CREATE INDEX IF NOT EXISTS idx_category_name ON category(name);

        CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            amount REAL NOT NULL CHECK (amount >= 0),
            timestamp TEXT NOT NULL,
            category_id INTEGER NOT NULL REFERENCES category(id),
            note TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_expense_category ON expense(category_id);",
    )?;

    transaction.commit()?;

    Ok(())
}
