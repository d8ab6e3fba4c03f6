//! Replace Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{
        errors::into_api_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Replace Product Handler
///
/// Overwrites every field; omitted fields take their defaults and are
/// validated like a new product.
#[endpoint(
    tags("products"),
    summary = "Replace Product",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid token"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.replace",
    skip(id, req, depot, res),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_product_id()?;

    tracing::Span::current().record("product_id", id.get());

    let request: ProductRequest = req.json_or_400().await?;

    let product = state
        .app
        .products
        .replace_product(id, request.into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/products/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(product_id = %id, "replaced product");

    Ok(Envelope::ok("product updated", product.into()))
}
