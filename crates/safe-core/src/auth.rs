//! Admin authorization by pre-shared secret.
//!
//! Two independent checks use the same secret:
//!
//! - [`AdminGuard::is_admin_view`] is a presentation flag. It only decides
//!   whether delete controls are rendered.
//! - [`AdminGuard::authorize`] guards the delete path and mints an
//!   [`AdminGrant`]. Storage deletion requires a grant, so the presentation
//!   flag can never stand in for authorization.
//!
//! Comparison is exact string equality, evaluated in constant time.

use std::fmt;

use subtle::ConstantTimeEq;

use crate::errors::CoreError;

/// Holds the configured admin secret for the lifetime of the process.
#[derive(Clone)]
pub struct AdminGuard {
    secret: Option<String>,
}

/// Proof that a request presented the admin secret.
///
/// Only [`AdminGuard::authorize`] can construct one.
#[derive(Debug)]
pub struct AdminGrant {
    token: String,
}

impl AdminGuard {
    /// Create a guard. An empty secret disables admin access entirely.
    #[must_use]
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Whether a secret is configured at all.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Presentation flag: true iff `token` is non-empty and equals the secret.
    #[must_use]
    pub fn is_admin_view(&self, token: Option<&str>) -> bool {
        token.is_some_and(|t| self.matches(t))
    }

    /// Authorization guard for destructive actions.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unauthorized` if the token is absent, empty, does
    /// not match, or no secret is configured.
    pub fn authorize(&self, token: Option<&str>) -> Result<AdminGrant, CoreError> {
        match token {
            Some(t) if self.matches(t) => Ok(AdminGrant {
                token: t.to_string(),
            }),
            _ => Err(CoreError::Unauthorized),
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        let Some(secret) = self.secret.as_deref() else {
            return false;
        };
        !candidate.is_empty()
            && candidate.len() == secret.len()
            && bool::from(candidate.as_bytes().ct_eq(secret.as_bytes()))
    }
}

impl fmt::Debug for AdminGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGuard")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AdminGrant {
    /// The token that was presented, for re-attaching to redirect links.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
