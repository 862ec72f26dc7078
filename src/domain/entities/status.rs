//! Health classification shared by transit and landing domains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle: every domain starts `pending`; a health-check run moves it to
/// `safe` or `unsafe`, and runs keep re-classifying it from there. Nothing
/// ever goes back to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DomainStatus {
    Pending,
    Safe,
    Unsafe,
}

impl DomainStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainStatus::Pending => "pending",
            DomainStatus::Safe => "safe",
            DomainStatus::Unsafe => "unsafe",
        }
    }

    /// Parses the lowercase wire form used in query parameters.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(DomainStatus::Pending),
            "safe" => Some(DomainStatus::Safe),
            "unsafe" => Some(DomainStatus::Unsafe),
            _ => None,
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
