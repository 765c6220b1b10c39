//! Defines the application error type.

use crate::database_id::CategoryId;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// The specified category name already exists in the database.
    ///
    /// Category names are compared case-insensitively, so "travel" clashes
    /// with an existing "Travel".
    #[error("the category \"{0}\" already exists in the database")]
    DuplicateCategoryName(String),

    /// Tried to delete a category that expenses still reference.
    ///
    /// Deletion is rejected while dependent expenses exist rather than
    /// cascading, so the caller must delete or re-categorize the expenses
    /// first.
    #[error("the category with ID {0} is still referenced by at least one expense")]
    CategoryInUse(CategoryId),

    /// A negative amount was used to create or update an expense.
    #[error("{0} is not a valid expense amount, amounts must be non-negative")]
    InvalidAmount(f64),

    /// The requested resource was not found.
    ///
    /// Callers should check that the ID is correct and that the resource
    /// has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(_)) if sql_error.extended_code == 787 => {
                Error::NotFound
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
