//! Whole-collection persistence for the product catalog.

mod errors;
mod json_file;

use mockall::automock;

use crate::domain::products::records::ProductRecord;

pub use errors::StorageError;
pub use json_file::JsonFileStorage;

/// Reads and writes the complete product collection in one go.
#[automock]
pub trait Storage: Send + Sync {
    /// Read every stored product, in stored order.
    fn read(&self) -> Result<Vec<ProductRecord>, StorageError>;

    /// Replace the stored collection with `products`.
    fn write(&self, products: &[ProductRecord]) -> Result<(), StorageError>;
}
