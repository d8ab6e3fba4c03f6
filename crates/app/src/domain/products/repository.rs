//! Products Repository
//!
//! In-memory catalog mirrored to [`Storage`] after every mutation.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::{
    domain::products::{
        data::NewProduct,
        errors::StoreError,
        records::{ProductId, ProductRecord},
    },
    storage::{Storage, StorageError},
};

pub(crate) struct ProductsRepository {
    storage: Arc<dyn Storage>,
    products: Vec<ProductRecord>,
}

impl ProductsRepository {
    /// Load the full collection from storage.
    pub(crate) fn load(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        let products = storage.read()?;

        Ok(Self { storage, products })
    }

    pub(crate) fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|product| product.id)
            .max()
            .map_or(ProductId::FIRST, ProductId::next)
    }

    pub(crate) fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub(crate) fn all(&self) -> Vec<ProductRecord> {
        self.products.clone()
    }

    pub(crate) fn get(&self, id: ProductId) -> Result<&ProductRecord, StoreError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a product under the next free ID and persist.
    ///
    /// A failed write leaves the product in memory.
    pub(crate) fn create(&mut self, product: NewProduct) -> Result<ProductRecord, StoreError> {
        let product = product.into_record(self.next_id());

        self.products.push(product.clone());
        self.save()?;

        Ok(product)
    }

    /// Replace the product sharing `product.id` and persist.
    pub(crate) fn update(&mut self, product: ProductRecord) -> Result<ProductRecord, StoreError> {
        let slot = self
            .products
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or(StoreError::NotFound(product.id))?;

        slot.clone_from(&product);

        self.save()?;

        Ok(product)
    }

    pub(crate) fn delete(&mut self, id: ProductId) -> Result<(), StoreError> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.products.remove(index);
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        self.storage
            .write(&self.products)
            .map_err(StoreError::Persistence)
    }
}

impl Debug for ProductsRepository {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProductsRepository")
            .field("products", &self.products.len())
            .finish_non_exhaustive()
    }
}
