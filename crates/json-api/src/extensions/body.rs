//! JSON request body parsing.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::envelope::ApiError;

pub(crate) trait RequestBodyExt {
    /// Parse the body as JSON, answering 400 when it is malformed.
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, ApiError>;
}

impl RequestBodyExt for Request {
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, ApiError> {
        self.parse_json::<T>().await.map_err(|source| {
            debug!("rejected request body: {source}");

            ApiError::bad_request("the request body is not a valid product JSON document")
        })
    }
}
