//! Product ID path parameter parsing.

use salvo::oapi::extract::PathParam;

use catalog_app::domain::products::records::ProductId;

use crate::envelope::ApiError;

pub(crate) trait ProductIdExt {
    fn into_product_id(self) -> Result<ProductId, ApiError>;
}

impl ProductIdExt for PathParam<String> {
    fn into_product_id(self) -> Result<ProductId, ApiError> {
        parse_product_id(&self.into_inner())
    }
}

fn parse_product_id(value: &str) -> Result<ProductId, ApiError> {
    value
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .map(ProductId::new)
        .ok_or_else(|| ApiError::bad_request("the product id must be a positive integer"))
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn positive_integers_are_accepted() {
        assert_eq!(parse_product_id("42"), Ok(ProductId::new(42)));
    }

    #[test]
    fn zero_negative_and_text_are_rejected() {
        for value in ["0", "-1", "abc", "1.5", ""] {
            let result = parse_product_id(value);

            assert!(
                matches!(&result, Err(error) if error.status() == StatusCode::BAD_REQUEST),
                "expected 400 for {value:?}, got {result:?}"
            );
        }
    }
}
