//! Core expense domain types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::{CategoryId, ExpenseId};

/// A single recorded expense, tagged with one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// The amount of money spent. Always non-negative.
    pub amount: f64,
    /// When the expense was recorded. Assigned by the store, in UTC.
    pub timestamp: OffsetDateTime,
    /// The ID of the category the expense belongs to.
    pub category_id: CategoryId,
    /// A free-text note describing what the expense was for.
    pub note: Option<String>,
}

/// The set of fields to change when updating an expense.
///
/// Fields left as `None` keep their current value. The note field is
/// doubly wrapped so a note can be cleared: `Some(None)` removes the
/// note, while `None` leaves it untouched.
///
/// # Examples
///
/// ```
/// use expense_ledger::models::ExpenseUpdate;
///
/// // Change only the amount.
/// let update = ExpenseUpdate {
///     amount: Some(12.99),
///     ..Default::default()
/// };
///
/// // Clear the note, leave everything else as is.
/// let update = ExpenseUpdate {
///     note: Some(None),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseUpdate {
    /// The new amount, if it should change.
    pub amount: Option<f64>,
    /// The new category, if the expense should be re-categorized.
    pub category_id: Option<CategoryId>,
    /// The new note: `Some(Some(text))` to replace it, `Some(None)` to
    /// clear it.
    pub note: Option<Option<String>>,
}
