//! Response Envelope
//!
//! Every JSON response, success or failure, carries its status code and a
//! human-readable message next to the payload.

use std::fmt::{Display, Formatter, Result as FmtResult};

use salvo::{
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};

/// Successful response carrying a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Envelope<T: ToSchema + 'static> {
    /// HTTP status code
    pub code: u16,

    /// Outcome summary
    pub message: String,

    /// Response payload
    pub data: T,
}

impl<T: ToSchema + 'static> Envelope<T> {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            code: status.as_u16(),
            message: message.into(),
            data,
        })
    }

    pub(crate) fn ok(message: impl Into<String>, data: T) -> Json<Self> {
        Self::new(StatusCode::OK, message, data)
    }
}

/// Response without a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Message {
    /// HTTP status code
    pub code: u16,

    /// Outcome summary or error description
    pub message: String,
}

impl Message {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Handler error rendered as a [`Message`] envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Details stay in the logs.
    pub(crate) fn internal_server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "an unexpected error occurred while processing the request",
        )
    }
}

#[cfg(test)]
impl ApiError {
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.status.as_u16(), self.message)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Message::new(self.status, self.message)));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, operation: &mut Operation) {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(status.canonical_reason().unwrap_or("Error")),
            );
        }
    }
}
