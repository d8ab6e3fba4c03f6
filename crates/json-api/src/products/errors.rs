//! Product Errors

use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::Validation(source) => ApiError::bad_request(source.to_string()),
        ProductsServiceError::NotFound(_) | ProductsServiceError::NoResults(_) => {
            ApiError::not_found(error.to_string())
        }
        ProductsServiceError::Persistence(source) => {
            error!("failed to persist products: {source}");

            ApiError::internal_server_error()
        }
        ProductsServiceError::Interrupted(source) => {
            error!("catalog update did not complete: {source}");

            ApiError::internal_server_error()
        }
    }
}
