//! Product validation.
//!
//! Checks run in a fixed order and the first failure is reported.

use thiserror::Error;

use crate::domain::products::{
    data::ProductDraft,
    records::{ExpirationDate, ProductId, ProductRecord},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("code_value is required")]
    MissingCodeValue,

    #[error("price is required and must be non-zero")]
    MissingPrice,

    #[error("quantity is required and must be non-zero")]
    MissingQuantity,

    #[error("expiration_date \"{0}\" is not a valid dd/mm/yyyy date")]
    InvalidExpirationDate(String),

    #[error("code_value \"{0}\" is already in use")]
    DuplicateCodeValue(String),
}

/// Validate a candidate product against the current collection.
///
/// A zero price or quantity counts as missing. `exclude` names the record
/// being updated so it does not collide with its own code.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate(
    draft: &ProductDraft,
    existing: &[ProductRecord],
    exclude: Option<ProductId>,
) -> Result<(), ValidationError> {
    if draft.name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    if draft.code_value.is_empty() {
        return Err(ValidationError::MissingCodeValue);
    }

    if draft.price == 0.0 {
        return Err(ValidationError::MissingPrice);
    }

    if draft.quantity == 0 {
        return Err(ValidationError::MissingQuantity);
    }

    if let Some(value) = &draft.expiration_date
        && value.parse::<ExpirationDate>().is_err()
    {
        return Err(ValidationError::InvalidExpirationDate(value.clone()));
    }

    let duplicate = existing
        .iter()
        .filter(|product| Some(product.id) != exclude)
        .any(|product| product.code_value == draft.code_value);

    if duplicate {
        return Err(ValidationError::DuplicateCodeValue(draft.code_value.clone()));
    }

    Ok(())
}
