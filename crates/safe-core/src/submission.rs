//! Submission validation.
//!
//! `Submission` is what the form posted. `NewStatus` is what the store is
//! allowed to insert, and it can only be built through [`Submission::validate`].
//! The required fields are decided here and nowhere else.

use serde::Deserialize;

use crate::errors::CoreError;

/// Raw, untrusted check-in fields as received from the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated check-in ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatus {
    name: String,
    id_number: Option<String>,
    location: String,
    status: String,
    message: Option<String>,
    ip_address: String,
}

impl Submission {
    /// Trim every field and enforce the required ones (`name`, `location`,
    /// `status`). Blank optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` naming the first blank required field.
    pub fn validate(self, ip_address: impl Into<String>) -> Result<NewStatus, CoreError> {
        let name = required(self.name, "name")?;
        let location = required(self.location, "location")?;
        let status = required(self.status, "status")?;

        Ok(NewStatus {
            name,
            id_number: optional(self.id_number),
            location,
            status,
            message: optional(self.message),
            ip_address: ip_address.into(),
        })
    }
}

impl NewStatus {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn id_number(&self) -> Option<&str> {
        self.id_number.as_deref()
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CoreError> {
    optional(value).ok_or(CoreError::MissingField { field })
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
