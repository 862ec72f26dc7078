//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls,
//! validation and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers and the scheduler.
//!
//! # Available Services
//!
//! - [`services::group_service::GroupService`] - Pool management and overview
//! - [`services::resolver_service::ResolverService`] - Redirect resolution
//! - [`services::health_service::HealthService`] - Health-check engine

pub mod services;
