//! The status record entity and its status enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Self-reported condition of the person checking in.
///
/// The store keeps whatever text was submitted. Anything that is not one of
/// the known values is displayed as [`Status::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Safe,
    Help,
    Other,
}

impl Status {
    /// Every status, in the order the submission form offers them.
    pub const ALL: [Self; 3] = [Self::Safe, Self::Help, Self::Other];

    /// Return the string representation used in SQL storage and form values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Help => "Help",
            Self::Other => "Other",
        }
    }

    /// Map stored free text onto a known status. Unknown text becomes `Other`.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "Safe" => Self::Safe,
            "Help" => Self::Help,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StatusRecord
// ---------------------------------------------------------------------------

/// One emergency check-in. Inserted once, never updated, deleted only by an
/// authorized admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusRecord {
    pub id: i64,
    pub name: String,
    /// Searchable but never rendered.
    pub id_number: Option<String>,
    pub location: String,
    /// Raw submitted status text.
    pub status: String,
    pub message: Option<String>,
    /// Never rendered.
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
}

impl StatusRecord {
    /// The status used for display.
    #[must_use]
    pub fn status_kind(&self) -> Status {
        Status::from_stored(&self.status)
    }
}

/// Parse a record identifier taken from a form field.
///
/// # Errors
///
/// Returns `CoreError::InvalidRecordId` if the value is missing, blank, or not
/// an integer.
pub fn parse_record_id(raw: Option<&str>) -> Result<i64, CoreError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    raw.parse::<i64>()
        .map_err(|_| CoreError::InvalidRecordId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Safe", Status::Safe)]
    #[case("Help", Status::Help)]
    #[case("Other", Status::Other)]
    #[case("safe", Status::Other)]
    #[case("on the move", Status::Other)]
    #[case("", Status::Other)]
    fn unknown_status_text_displays_as_other(#[case] stored: &str, #[case] expected: Status) {
        assert_eq!(Status::from_stored(stored), expected);
    }

    #[test]
    fn as_str_matches_from_stored() {
        for status in Status::ALL {
            assert_eq!(Status::from_stored(status.as_str()), status);
        }
    }

    #[rstest]
    #[case(Some("42"), Ok(42))]
    #[case(Some(" 7 "), Ok(7))]
    #[case(None, Err(CoreError::InvalidRecordId(String::new())))]
    #[case(Some(""), Err(CoreError::InvalidRecordId(String::new())))]
    #[case(Some("abc"), Err(CoreError::InvalidRecordId("abc".into())))]
    fn record_id_parsing(#[case] raw: Option<&str>, #[case] expected: Result<i64, CoreError>) {
        assert_eq!(parse_record_id(raw), expected);
    }
}
