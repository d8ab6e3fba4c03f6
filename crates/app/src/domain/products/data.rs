//! Products Data

use crate::domain::products::{
    records::{ExpirationDate, ProductId, ProductRecord},
    validation::ValidationError,
};

/// Product fields supplied by a caller.
///
/// Absent fields are `None`. Creation and replacement fill them with
/// defaults; patching leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub expiration_date: Option<String>,
    pub is_published: Option<bool>,
    pub price: Option<f64>,
}

/// Candidate product awaiting validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub expiration_date: Option<String>,
    pub is_published: bool,
    pub price: f64,
}

impl ProductDraft {
    /// Overlay `fields` on top of an existing record.
    #[must_use]
    pub fn patched(current: &ProductRecord, fields: ProductFields) -> Self {
        Self {
            name: fields.name.unwrap_or_else(|| current.name.clone()),
            quantity: fields.quantity.unwrap_or(current.quantity),
            code_value: fields
                .code_value
                .unwrap_or_else(|| current.code_value.clone()),
            expiration_date: fields
                .expiration_date
                .or_else(|| current.expiration_date.map(|date| date.to_string())),
            is_published: fields.is_published.unwrap_or(current.is_published),
            price: fields.price.unwrap_or(current.price),
        }
    }

    /// Convert a validated draft into a product without an ID.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidExpirationDate`] when the expiration
    /// is not a `dd/mm/yyyy` date.
    pub fn into_new_product(self) -> Result<NewProduct, ValidationError> {
        let expiration_date = self
            .expiration_date
            .map(|value| {
                value
                    .parse::<ExpirationDate>()
                    .map_err(|_source| ValidationError::InvalidExpirationDate(value))
            })
            .transpose()?;

        Ok(NewProduct {
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            expiration_date,
            is_published: self.is_published,
            price: self.price,
        })
    }
}

impl From<ProductFields> for ProductDraft {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name.unwrap_or_default(),
            quantity: fields.quantity.unwrap_or_default(),
            code_value: fields.code_value.unwrap_or_default(),
            expiration_date: fields.expiration_date,
            is_published: fields.is_published.unwrap_or_default(),
            price: fields.price.unwrap_or_default(),
        }
    }
}

/// Validated product that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub expiration_date: Option<ExpirationDate>,
    pub is_published: bool,
    pub price: f64,
}

impl NewProduct {
    #[must_use]
    pub fn into_record(self, id: ProductId) -> ProductRecord {
        ProductRecord {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            expiration_date: self.expiration_date,
            is_published: self.is_published,
            price: self.price,
        }
    }
}
