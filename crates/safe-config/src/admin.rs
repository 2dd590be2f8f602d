//! Admin secret configuration.
//!
//! The secret comes from `admin.token` (usually `IAMSAFE_ADMIN__TOKEN` or the
//! legacy `ADMIN_TOKEN` variable) or, when that is empty, from the file named
//! by `admin.token_file` (e.g. a Docker secret under `/run/secrets`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub token_file: String,
}

impl AdminConfig {
    /// Resolve the admin secret. `None` means admin access is disabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SecretFile` if `token_file` is set but unreadable.
    pub fn resolve_token(&self) -> Result<Option<String>, ConfigError> {
        if !self.token.is_empty() {
            return Ok(Some(self.token.clone()));
        }
        if self.token_file.is_empty() {
            return Ok(None);
        }

        let path = PathBuf::from(&self.token_file);
        let contents = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::SecretFile { path, source })?;
        let token = contents.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }
}
