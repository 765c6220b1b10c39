//! A category-tagged expense ledger backed by SQLite.
//!
//! This library provides two repositories: a [CategoryStore] for managing
//! named expense categories and an [ExpenseStore] for the expenses
//! themselves. Every expense references exactly one category, and a
//! category cannot be deleted while expenses still reference it.
//!
//! [CategoryStore]: crate::stores::CategoryStore
//! [ExpenseStore]: crate::stores::ExpenseStore

#![warn(missing_docs)]

mod database_id;
mod db;
mod error;
pub mod models;
pub mod stores;

pub use database_id::{CategoryId, DatabaseId, ExpenseId};
pub use db::initialize as initialize_db;
pub use error::Error;
