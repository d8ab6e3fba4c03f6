//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    auth::{AuthService, StaticTokenAuthService},
    domain::products::{FileProductsService, ProductsService},
    storage::{JsonFileStorage, StorageError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("product storage is unavailable")]
    StorageUnavailable(#[source] StorageError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context over a products JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing or cannot be decoded.
    pub fn from_products_file(path: &Path, token: String) -> Result<Self, AppInitError> {
        let storage = JsonFileStorage::open(path).map_err(AppInitError::StorageUnavailable)?;

        let products =
            FileProductsService::load(Arc::new(storage)).map_err(AppInitError::StorageUnavailable)?;

        Ok(Self {
            products: Arc::new(products),
            auth: Arc::new(StaticTokenAuthService::new(token)),
        })
    }
}
