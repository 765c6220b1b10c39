//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior};
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::{CategoryId, ExpenseId},
    models::{Expense, ExpenseUpdate},
    stores::ExpenseStore,
};

/// Creates and retrieves expenses to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new expense store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    fn record(
        &self,
        amount: f64,
        category_id: CategoryId,
        note: Option<&str>,
    ) -> Result<Expense, Error> {
        validate_amount(amount)?;

        let connection = self.lock()?;
        let transaction =
            SqlTransaction::new_unchecked(&connection, TransactionBehavior::Immediate)?;

        ensure_category_exists(category_id, &transaction)?;

        let timestamp = OffsetDateTime::now_utc();

        transaction.execute(
            "INSERT INTO expense (amount, timestamp, category_id, note)
             VALUES (?1, ?2, ?3, ?4)",
            (amount, timestamp, category_id, note),
        )?;
        let id = transaction.last_insert_rowid();

        transaction.commit()?;

        Ok(Expense {
            id,
            amount,
            timestamp,
            category_id,
            note: note.map(|text| text.to_string()),
        })
    }

    fn get(&self, expense_id: ExpenseId) -> Result<Expense, Error> {
        self.lock()?
            .prepare(
                "SELECT id, amount, timestamp, category_id, note
                 FROM expense WHERE id = :id;",
            )?
            .query_row(&[(":id", &expense_id)], map_row)
            .map_err(|error| error.into())
    }

    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, Error> {
        self.lock()?
            .prepare(
                "SELECT id, amount, timestamp, category_id, note
                 FROM expense WHERE category_id = :category_id
                 ORDER BY timestamp ASC, id ASC;",
            )?
            .query_map(&[(":category_id", &category_id)], map_row)?
            .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
            .collect()
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        self.lock()?
            .prepare(
                "SELECT id, amount, timestamp, category_id, note
                 FROM expense ORDER BY timestamp ASC, id ASC;",
            )?
            .query_map([], map_row)?
            .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
            .collect()
    }

    fn update(&self, expense_id: ExpenseId, update: ExpenseUpdate) -> Result<Expense, Error> {
        let connection = self.lock()?;
        let transaction =
            SqlTransaction::new_unchecked(&connection, TransactionBehavior::Immediate)?;

        let existing = transaction
            .prepare(
                "SELECT id, amount, timestamp, category_id, note
                 FROM expense WHERE id = :id;",
            )?
            .query_row(&[(":id", &expense_id)], map_row)
            .map_err(Error::from)?;

        let amount = update.amount.unwrap_or(existing.amount);
        validate_amount(amount)?;

        let category_id = update.category_id.unwrap_or(existing.category_id);
        if category_id != existing.category_id {
            ensure_category_exists(category_id, &transaction)?;
        }

        let note = update.note.unwrap_or(existing.note);

        transaction.execute(
            "UPDATE expense SET amount = ?1, category_id = ?2, note = ?3 WHERE id = ?4",
            (amount, category_id, &note, expense_id),
        )?;

        transaction.commit()?;

        Ok(Expense {
            id: expense_id,
            amount,
            timestamp: existing.timestamp,
            category_id,
            note,
        })
    }

    fn delete(&self, expense_id: ExpenseId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM expense WHERE id = ?1", [expense_id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

fn validate_amount(amount: f64) -> Result<(), Error> {
    // The comparison is written so NaN is rejected too.
    if amount >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidAmount(amount))
    }
}

fn ensure_category_exists(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<(), Error> {
    let category_exists: bool = connection.query_row(
        "SELECT EXISTS (SELECT 1 FROM category WHERE id = ?1)",
        (category_id,),
        |row| row.get(0),
    )?;

    if category_exists {
        Ok(())
    } else {
        Err(Error::NotFound)
    }
}

fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        timestamp: row.get(2)?,
        category_id: row.get(3)?,
        note: row.get(4)?,
    })
}
