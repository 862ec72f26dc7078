//! Outbound safety probing.
//!
//! The prober is a total function: every failure mode (timeout, DNS error,
//! refused connection, HTTP error status, flagged content) resolves to
//! [`SafetyVerdict::Unsafe`]. An unreachable or erroring domain must never be
//! advertised to visitors, and the health-check engine never needs per-domain
//! error handling.

pub mod http_prober;

pub use http_prober::HttpProber;

use crate::domain::entities::DomainStatus;
use async_trait::async_trait;

/// Substrings that mark a response body as compromised. Matched against the
/// lower-cased body; the set is configuration, not logic.
pub const DANGER_KEYWORDS: &[&str] = &[
    "dangerous",
    "deceptive",
    "phishing",
    "malware",
    "危险",
    "欺诈",
    "钓鱼",
    "恶意软件",
    "停止访问",
];

/// Outcome of probing a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyVerdict {
    Safe,
    Unsafe,
}

impl SafetyVerdict {
    /// The persisted status a verdict maps to.
    pub fn status(self) -> DomainStatus {
        match self {
            SafetyVerdict::Safe => DomainStatus::Safe,
            SafetyVerdict::Unsafe => DomainStatus::Unsafe,
        }
    }
}

/// Probes a URL and classifies it. Implementations must not return errors;
/// anything that prevents a clean 2xx/3xx response with unflagged content is
/// an `Unsafe` verdict.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SafetyProber: Send + Sync {
    async fn probe(&self, url: &str) -> SafetyVerdict;
}
