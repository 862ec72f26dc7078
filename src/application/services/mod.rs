//! Business logic services for the application layer.

pub mod group_service;
pub mod health_service;
pub mod resolver_service;

pub use group_service::{AddReport, GroupService, PathSpec};
pub use health_service::{CheckRunSummary, HealthService};
pub use resolver_service::{RedirectDecision, RedirectPreview, RejectReason, ResolverService};
