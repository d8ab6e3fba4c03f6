//! Test Helpers

use crate::domain::products::{
    data::ProductFields,
    records::{ProductId, ProductRecord},
};

pub(crate) fn seed_product(id: u64, code_value: &str, price: f64) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        quantity: 5,
        code_value: code_value.to_string(),
        expiration_date: None,
        is_published: false,
        price,
    }
}

pub(crate) fn fields(name: &str, code_value: &str, price: f64, quantity: i64) -> ProductFields {
    ProductFields {
        name: Some(name.to_string()),
        quantity: Some(quantity),
        code_value: Some(code_value.to_string()),
        expiration_date: None,
        is_published: None,
        price: Some(price),
    }
}
