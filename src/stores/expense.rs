//! Defines the expense store trait.

use crate::{
    Error,
    database_id::{CategoryId, ExpenseId},
    models::{Expense, ExpenseUpdate},
};

/// Creates, retrieves and maintains the ledger of recorded expenses.
pub trait ExpenseStore {
    /// Record a new expense against a category.
    ///
    /// The expense's timestamp is assigned by the store from the current
    /// wall clock (UTC).
    ///
    /// # Errors
    /// Returns an [Error::InvalidAmount] if `amount` is negative, or an
    /// [Error::NotFound] if `category_id` does not refer to an existing
    /// category.
    fn record(
        &self,
        amount: f64,
        category_id: CategoryId,
        note: Option<&str>,
    ) -> Result<Expense, Error>;

    /// Get an expense by its ID.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no expense has `expense_id`.
    fn get(&self, expense_id: ExpenseId) -> Result<Expense, Error>;

    /// Get all expenses for a category, ordered by timestamp ascending.
    ///
    /// An unknown `category_id` yields an empty list rather than an error.
    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, Error>;

    /// Get all expenses in the ledger, ordered by timestamp ascending.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Apply a partial update to an existing expense.
    ///
    /// Fields left unset in `update` keep their current values. The
    /// updated fields are validated the same way as in
    /// [ExpenseStore::record].
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no expense has `expense_id` or if
    /// the updated category does not exist, or an [Error::InvalidAmount]
    /// if the updated amount is negative.
    fn update(&self, expense_id: ExpenseId, update: ExpenseUpdate) -> Result<Expense, Error>;

    /// Delete an expense.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no expense has `expense_id`.
    fn delete(&self, expense_id: ExpenseId) -> Result<(), Error>;
}
