//! HTTP GET prober backed by reqwest.

use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;

use super::{DANGER_KEYWORDS, SafetyProber, SafetyVerdict};

/// User-Agent presented to probed domains so trivial bot blocks do not skew
/// the verdict.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const MAX_REDIRECT_HOPS: usize = 10;

/// Prefixes `http://` when the target has no scheme; stored domains are bare
/// hostnames.
fn normalize_probe_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Builds a prober with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECT_HOPS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SafetyProber for HttpProber {
    async fn probe(&self, url: &str) -> SafetyVerdict {
        let target = normalize_probe_url(url);

        let response = match self.client.get(&target).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %target, error = %e, "probe request failed");
                return SafetyVerdict::Unsafe;
            }
        };

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            debug!(url = %target, status = status.as_u16(), "probe got error status");
            return SafetyVerdict::Unsafe;
        }

        let body = match response.text().await {
            Ok(body) => body.to_lowercase(),
            Err(e) => {
                debug!(url = %target, error = %e, "probe body read failed");
                return SafetyVerdict::Unsafe;
            }
        };

        if let Some(keyword) = DANGER_KEYWORDS.iter().find(|kw| body.contains(*kw)) {
            debug!(url = %target, keyword, "probe found danger keyword");
            return SafetyVerdict::Unsafe;
        }

        SafetyVerdict::Safe
    }
}
