//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{
        errors::into_api_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Create Product Handler
///
/// Validates the payload and stores it under the next free ID.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(req, depot, res),
    fields(product_id = tracing::field::Empty, code_value = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: ProductRequest = req.json_or_400().await?;

    let product = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(into_api_error)?;

    let span = tracing::Span::current();

    span.record("product_id", product.id.get());
    span.record("code_value", product.code_value.as_str());

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product.id, "created product");

    Ok(Envelope::new(
        StatusCode::CREATED,
        "product created",
        product.into(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, data::ProductFields, records::ProductId,
        validation::ValidationError,
    };

    use crate::{
        envelope::Message,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|fields| {
                *fields
                    == ProductFields {
                        name: Some("Product 7".to_string()),
                        quantity: Some(5),
                        code_value: Some("CODE-7".to_string()),
                        expiration_date: None,
                        is_published: None,
                        price: Some(10.0),
                    }
            })
            .return_once(|_| Ok(make_product(7)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "Product 7",
                "quantity": 5,
                "code_value": "CODE-7",
                "price": 10.0
            }))
            .send(&make_service(products))
            .await;

        let body: Envelope<ProductResponse> = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/7"));
        assert_eq!(body.code, 201);
        assert_eq!(body.message, "product created");
        assert_eq!(body.data.id, ProductId::new(7).get());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_validation_error_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ValidationError::MissingName.into()));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "code_value": "X", "price": 1.0, "quantity": 1 }))
            .send(&make_service(products))
            .await;

        let body: Message = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, ValidationError::MissingName.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_json_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .raw_json("{ \"name\": ")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_code_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::Validation(
                ValidationError::DuplicateCodeValue("CODE-1".to_string()),
            ))
        });

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "A", "code_value": "CODE-1", "price": 1.0, "quantity": 1 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
