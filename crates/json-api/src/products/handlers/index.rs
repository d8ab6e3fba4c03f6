//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{
        errors::into_api_error,
        models::{ProductResponse, into_responses},
    },
    state::State,
};

/// Product Index Handler
///
/// Returns every product in insertion order.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ProductResponse>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok("products found", into_responses(products)))
}

#[cfg(test)]
mod tests {
    use std::io;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::{
        domain::products::{MockProductsService, ProductsServiceError},
        storage::StorageError,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products_in_order() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product(2), make_product(1)]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let body: Envelope<Vec<ProductResponse>> = res.take_json().await?;
        let ids: Vec<u64> = body.data.iter().map(|product| product.id).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.code, 200);
        assert_eq!(body.message, "products found");
        assert_eq!(ids, vec![2, 1]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        let body: Envelope<Vec<ProductResponse>> = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(body.data.is_empty(), "expected no products");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_list_products().once().return_once(|| {
            Err(ProductsServiceError::Persistence(StorageError::Io(
                io::Error::other("boom"),
            )))
        });

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
