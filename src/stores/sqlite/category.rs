//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    database_id::CategoryId,
    models::{Category, CategoryName},
    stores::CategoryStore,
};

/// Creates and retrieves expense categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }
}

impl CategoryStore for SQLiteCategoryStore {
    fn create(&self, name: CategoryName) -> Result<Category, Error> {
        let connection = self.lock()?;
        let transaction =
            SqlTransaction::new_unchecked(&connection, TransactionBehavior::Immediate)?;

        // The name column is declared COLLATE NOCASE, so equality here is
        // case-insensitive.
        let name_taken: bool = transaction.query_row(
            "SELECT EXISTS (SELECT 1 FROM category WHERE name = ?1)",
            (name.as_ref(),),
            |row| row.get(0),
        )?;

        if name_taken {
            return Err(Error::DuplicateCategoryName(name.to_string()));
        }

        transaction.execute("INSERT INTO category (name) VALUES (?1);", (name.as_ref(),))?;
        let id = transaction.last_insert_rowid();

        transaction.commit()?;

        Ok(Category { id, name })
    }

    fn get(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.lock()?
            .prepare("SELECT id, name FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], map_row)
            .map_err(|error| error.into())
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.lock()?
            .prepare("SELECT id, name FROM category ORDER BY name ASC;")?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    fn rename(&self, category_id: CategoryId, new_name: CategoryName) -> Result<Category, Error> {
        let connection = self.lock()?;
        let transaction =
            SqlTransaction::new_unchecked(&connection, TransactionBehavior::Immediate)?;

        // A missing category takes precedence over a name collision.
        let category_exists: bool = transaction.query_row(
            "SELECT EXISTS (SELECT 1 FROM category WHERE id = ?1)",
            (category_id,),
            |row| row.get(0),
        )?;

        if !category_exists {
            return Err(Error::NotFound);
        }

        let name_taken: bool = transaction.query_row(
            "SELECT EXISTS (SELECT 1 FROM category WHERE name = ?1 AND id <> ?2)",
            (new_name.as_ref(), category_id),
            |row| row.get(0),
        )?;

        if name_taken {
            return Err(Error::DuplicateCategoryName(new_name.to_string()));
        }

        transaction.execute(
            "UPDATE category SET name = ?1 WHERE id = ?2",
            (new_name.as_ref(), category_id),
        )?;

        transaction.commit()?;

        Ok(Category {
            id: category_id,
            name: new_name,
        })
    }

    fn delete(&self, category_id: CategoryId) -> Result<(), Error> {
        let connection = self.lock()?;
        let transaction =
            SqlTransaction::new_unchecked(&connection, TransactionBehavior::Immediate)?;

        let in_use: bool = transaction.query_row(
            "SELECT EXISTS (SELECT 1 FROM expense WHERE category_id = ?1)",
            (category_id,),
            |row| row.get(0),
        )?;

        if in_use {
            return Err(Error::CategoryInUse(category_id));
        }

        let rows_affected =
            transaction.execute("DELETE FROM category WHERE id = ?1", [category_id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        transaction.commit()?;

        Ok(())
    }
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);

    Ok(Category { id, name })
}
