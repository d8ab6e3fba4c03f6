//! Products service errors.

use thiserror::Error;
use tokio::task::JoinError;

use crate::{
    domain::products::{records::ProductId, validation::ValidationError},
    storage::StorageError,
};

/// Catalog store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("failed to persist products")]
    Persistence(#[source] StorageError),
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("no products found with a price greater than or equal to {0}")]
    NoResults(f64),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to persist products")]
    Persistence(#[source] StorageError),

    #[error("catalog update did not complete")]
    Interrupted(#[from] JoinError),
}

impl From<StoreError> for ProductsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Persistence(source) => Self::Persistence(source),
        }
    }
}
