//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tokio::{sync::Mutex, task};
use tracing::{debug, info};

use crate::{
    domain::products::{
        data::{ProductDraft, ProductFields},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::ProductsRepository,
        validation::validate,
    },
    storage::{Storage, StorageError},
};

/// Catalog service backed by whole-file storage.
///
/// Every use case holds the store lock for its full
/// read-modify-write-persist sequence. Mutations run on the blocking pool
/// since each one rewrites the whole file.
#[derive(Debug)]
pub struct FileProductsService {
    store: Arc<Mutex<ProductsRepository>>,
}

impl FileProductsService {
    /// Load the catalog from `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored collection cannot be read.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        let store = ProductsRepository::load(storage)?;

        info!(count = store.products().len(), "loaded product catalog");

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
        })
    }

    /// Run `mutation` under the store lock on the blocking pool.
    async fn mutate<T, F>(&self, mutation: F) -> Result<T, ProductsServiceError>
    where
        T: Send + 'static,
        F: FnOnce(&mut ProductsRepository) -> Result<T, ProductsServiceError> + Send + 'static,
    {
        let mut store = Arc::clone(&self.store).lock_owned().await;

        task::spawn_blocking(move || mutation(&mut store)).await?
    }
}

#[async_trait]
impl ProductsService for FileProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.store.lock().await.all())
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let store = self.store.lock().await;

        Ok(store.get(product)?.clone())
    }

    async fn search_products(
        &self,
        min_price: f64,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let store = self.store.lock().await;

        let products: Vec<ProductRecord> = store
            .products()
            .iter()
            .filter(|product| product.price >= min_price)
            .cloned()
            .collect();

        if products.is_empty() {
            return Err(ProductsServiceError::NoResults(min_price));
        }

        Ok(products)
    }

    async fn create_product(
        &self,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let created = self
            .mutate(move |store| {
                let draft = ProductDraft::from(fields);

                validate(&draft, store.products(), None)?;

                Ok(store.create(draft.into_new_product()?)?)
            })
            .await?;

        debug!(product_id = %created.id, "created product");

        Ok(created)
    }

    async fn replace_product(
        &self,
        product: ProductId,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let updated = self
            .mutate(move |store| {
                store.get(product)?;

                let draft = ProductDraft::from(fields);

                validate(&draft, store.products(), Some(product))?;

                Ok(store.update(draft.into_new_product()?.into_record(product))?)
            })
            .await?;

        debug!(product_id = %product, "replaced product");

        Ok(updated)
    }

    async fn patch_product(
        &self,
        product: ProductId,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let updated = self
            .mutate(move |store| {
                let current = store.get(product)?;

                let code_changed = fields
                    .code_value
                    .as_ref()
                    .is_some_and(|code_value| *code_value != current.code_value);

                let draft = ProductDraft::patched(current, fields);

                // An unchanged code is not re-checked for uniqueness.
                let existing: &[ProductRecord] =
                    if code_changed { store.products() } else { &[] };

                validate(&draft, existing, Some(product))?;

                Ok(store.update(draft.into_new_product()?.into_record(product))?)
            })
            .await?;

        debug!(product_id = %product, "patched product");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        self.mutate(move |store| Ok(store.delete(product)?)).await?;

        debug!(product_id = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieves every product priced at or above `min_price`.
    ///
    /// An empty match is reported as [`ProductsServiceError::NoResults`].
    async fn search_products(
        &self,
        min_price: f64,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Validates and stores a new product under the next free ID.
    async fn create_product(
        &self,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites every field of an existing product.
    async fn replace_product(
        &self,
        product: ProductId,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites only the supplied fields of an existing product.
    async fn patch_product(
        &self,
        product: ProductId,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given ID.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
