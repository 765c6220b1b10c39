//! Defines the repository traits for the domain models and their SQLite
//! implementations.

mod category;
mod expense;
mod sqlite;

pub use category::CategoryStore;
pub use expense::ExpenseStore;
pub use sqlite::{SQLiteCategoryStore, SQLiteExpenseStore};
