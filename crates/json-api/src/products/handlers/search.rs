//! Search Products Handler

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

const PRICE_GT_PARAM: &str = "priceGt";

/// Search Products Handler
///
/// Returns every product priced at or above `priceGt`.
#[endpoint(
    tags("products"),
    summary = "Search Products By Price",
    responses(
        (status_code = StatusCode::OK, description = "Products found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid priceGt"),
        (status_code = StatusCode::NOT_FOUND, description = "No product matches"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ProductResponse>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let min_price = parse_price_gt(req.query::<String>(PRICE_GT_PARAM))?;

    let products = state
        .app
        .products
        .search_products(min_price)
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok("products found", into_responses(products)))
}

fn parse_price_gt(value: Option<String>) -> Result<f64, ApiError> {
    let value = value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::bad_request("the priceGt query parameter is required"))?;

    value
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ApiError::bad_request("the priceGt query parameter must be a decimal number"))
}
