//! Authentication

pub(crate) mod middleware;

/// Request header carrying the shared secret.
pub(crate) const TOKEN_HEADER: &str = "Token";
