//! Auth service.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use mockall::automock;
use zeroize::Zeroizing;

use crate::auth::AuthServiceError;

/// Accepts callers presenting one shared secret.
pub struct StaticTokenAuthService {
    secret: Zeroizing<String>,
}

impl StaticTokenAuthService {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret: Zeroizing::new(secret),
        }
    }
}

impl Debug for StaticTokenAuthService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StaticTokenAuthService")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AuthService for StaticTokenAuthService {
    fn authenticate(&self, token: &str) -> Result<(), AuthServiceError> {
        if self.secret.is_empty() || !constant_time_eq(token.as_bytes(), self.secret.as_bytes()) {
            return Err(AuthServiceError::InvalidToken);
        }

        Ok(())
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Checks a caller-supplied token against the configured secret.
    fn authenticate(&self, token: &str) -> Result<(), AuthServiceError>;
}

/// Compare without short-circuiting on the first differing byte.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .zip(right)
        .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
