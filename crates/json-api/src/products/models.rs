//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::{data::ProductFields, records::ProductRecord};

/// Product fields accepted by create, replace and patch.
///
/// Every field is optional at the wire level; create and replace fill
/// absent fields with defaults, patch leaves them untouched.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Display name
    pub name: Option<String>,

    /// Units in stock, must be non-zero
    pub quantity: Option<i64>,

    /// Unique product code
    pub code_value: Option<String>,

    /// Expiration date as `dd/mm/yyyy`
    pub expiration_date: Option<String>,

    /// Whether the product is visible to customers
    pub is_published: Option<bool>,

    /// Unit price, must be non-zero
    pub price: Option<f64>,
}

impl From<ProductRequest> for ProductFields {
    fn from(request: ProductRequest) -> Self {
        ProductFields {
            name: request.name,
            quantity: request.quantity,
            code_value: request.code_value,
            expiration_date: request.expiration_date.filter(|date| !date.is_empty()),
            is_published: request.is_published,
            price: request.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product ID
    pub id: u64,

    /// Display name
    pub name: String,

    /// Units in stock
    pub quantity: i64,

    /// Unique product code
    pub code_value: String,

    /// Expiration date as `dd/mm/yyyy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Whether the product is visible to customers
    pub is_published: bool,

    /// Unit price
    pub price: f64,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.get(),
            name: product.name,
            quantity: product.quantity,
            code_value: product.code_value,
            expiration_date: product.expiration_date.map(|date| date.to_string()),
            is_published: product.is_published,
            price: product.price,
        }
    }
}

pub(crate) fn into_responses(products: Vec<ProductRecord>) -> Vec<ProductResponse> {
    products.into_iter().map(Into::into).collect()
}
