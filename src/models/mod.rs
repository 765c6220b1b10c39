//! Domain models for categories and expenses.

mod category;
mod expense;

pub use category::{Category, CategoryName};
pub use expense::{Expense, ExpenseUpdate};
