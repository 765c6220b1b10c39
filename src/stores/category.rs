//! Defines the category store trait.

use crate::{
    Error,
    database_id::CategoryId,
    models::{Category, CategoryName},
};

/// Creates, retrieves and maintains the registry of expense categories.
pub trait CategoryStore {
    /// Create a new category and add it to the store.
    ///
    /// # Errors
    /// Returns an [Error::DuplicateCategoryName] if a category with the
    /// same name already exists. Names are compared case-insensitively.
    fn create(&self, name: CategoryName) -> Result<Category, Error>;

    /// Get a category by its ID.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no category has `category_id`.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get all categories, ordered alphabetically by name.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Change the name of an existing category.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no category has `category_id`, or
    /// an [Error::DuplicateCategoryName] if `new_name` collides with
    /// another category's name (case-insensitively).
    fn rename(&self, category_id: CategoryId, new_name: CategoryName) -> Result<Category, Error>;

    /// Delete a category.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no category has `category_id`, or
    /// an [Error::CategoryInUse] if any expense still references the
    /// category. Callers must delete or re-categorize those expenses
    /// before the category can be removed.
    fn delete(&self, category_id: CategoryId) -> Result<(), Error>;
}
