//! Redirect resolution: inbound (host, path, user-agent) to one healthy
//! landing domain.

use rand::seq::IndexedRandom;
use serde_json::json;
use std::sync::Arc;

use crate::domain::repositories::{
    GroupRepository, LandingDomainRepository, TransitDomainRepository,
};
use crate::error::AppError;

/// Path prefixes owned by the management API. The resolver shares its
/// listening surface with it and must never treat management traffic as
/// redirect traffic.
pub const RESERVED_PREFIXES: &[&str] = &["api", "assets", "all-domains", "group"];

/// Substring blocklist for the User-Agent header. A cheap signature filter
/// against scraping noise, not a security boundary.
pub const BLOCKED_UA_FRAGMENTS: &[&str] = &[
    "bot",
    "spider",
    "crawler",
    "python-requests",
    "curl",
    "wget",
    "httpclient",
    "java",
    "go-http-client",
];

/// Why a request was not redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    AdminEndpoint,
    Bot,
    UnknownTransit,
    NoHealthyLanding,
}

impl RejectReason {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::AdminEndpoint => "admin_endpoint",
            RejectReason::Bot => "bot",
            RejectReason::UnknownTransit => "invalid_or_unhealthy_transit",
            RejectReason::NoHealthyLanding => "no_healthy_landing",
        }
    }

    /// Body text served with the 404.
    pub fn message(self) -> &'static str {
        match self {
            RejectReason::AdminEndpoint => "Not Found (Admin Endpoint)",
            RejectReason::Bot => "Not Found (Bot)",
            RejectReason::UnknownTransit => "Invalid or unhealthy transit link.",
            RejectReason::NoHealthyLanding => "No healthy landing page available.",
        }
    }
}

/// Outcome of resolving one inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    Redirect { target: String },
    Reject(RejectReason),
}

/// Result of an admin dry-run resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPreview {
    pub landing_url: String,
    pub group_name: String,
}

pub struct ResolverService {
    transit_repo: Arc<dyn TransitDomainRepository>,
    landing_repo: Arc<dyn LandingDomainRepository>,
    group_repo: Arc<dyn GroupRepository>,
}

impl ResolverService {
    pub fn new(
        transit_repo: Arc<dyn TransitDomainRepository>,
        landing_repo: Arc<dyn LandingDomainRepository>,
        group_repo: Arc<dyn GroupRepository>,
    ) -> Self {
        Self {
            transit_repo,
            landing_repo,
            group_repo,
        }
    }

    /// Resolves one inbound request. Checks are ordered and short-circuit:
    /// admin-path guard, bot filter, host normalization, safe-transit lookup,
    /// uniform random pick among the group's safe landing domains.
    ///
    /// The candidate set is re-read fresh on every call; there is no cached
    /// list and no session stickiness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only on database failure; every
    /// resolution outcome is a [`RedirectDecision`].
    pub async fn resolve(
        &self,
        host_header: &str,
        request_path: &str,
        user_agent: &str,
    ) -> Result<RedirectDecision, AppError> {
        let trimmed = request_path.trim_start_matches('/');
        if trimmed.is_empty()
            || RESERVED_PREFIXES
                .iter()
                .any(|prefix| trimmed.starts_with(prefix))
        {
            return Ok(RedirectDecision::Reject(RejectReason::AdminEndpoint));
        }

        let user_agent = user_agent.to_lowercase();
        if BLOCKED_UA_FRAGMENTS
            .iter()
            .any(|fragment| user_agent.contains(fragment))
        {
            return Ok(RedirectDecision::Reject(RejectReason::Bot));
        }

        let host = host_header.split(':').next().unwrap_or(host_header);
        let lookup_path = format!("/{trimmed}");

        let Some(transit) = self
            .transit_repo
            .find_safe_by_host_path(host, &lookup_path)
            .await?
        else {
            return Ok(RedirectDecision::Reject(RejectReason::UnknownTransit));
        };

        let candidates = self.landing_repo.find_safe_by_group(transit.group_id).await?;

        let Some(chosen) = candidates.choose(&mut rand::rng()) else {
            return Ok(RedirectDecision::Reject(RejectReason::NoHealthyLanding));
        };

        Ok(RedirectDecision::Redirect {
            target: chosen.url.clone(),
        })
    }

    /// Dry-run resolution for the admin UI: matches the transit row whatever
    /// its health and skips the bot/admin filters, then picks among safe
    /// landing domains like the live path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the transit link is unknown or the
    /// group has no safe landing domain.
    pub async fn preview(&self, url: &str, path: &str) -> Result<RedirectPreview, AppError> {
        let Some(transit) = self.transit_repo.find_by_host_path(url, path).await? else {
            return Err(AppError::not_found(
                "Transit link not found",
                json!({ "url": url, "path": path }),
            ));
        };

        let candidates = self.landing_repo.find_safe_by_group(transit.group_id).await?;

        let Some(chosen) = candidates.choose(&mut rand::rng()) else {
            return Err(AppError::not_found(
                "No safe landing domain available",
                json!({ "group_id": transit.group_id }),
            ));
        };

        let group_name = self
            .group_repo
            .find_by_id(transit.group_id)
            .await?
            .map(|g| g.name)
            .unwrap_or_default();

        Ok(RedirectPreview {
            landing_url: chosen.url.clone(),
            group_name,
        })
    }
}
