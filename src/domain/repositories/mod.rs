//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in [`crate::infrastructure::persistence`], and `mockall` mocks are
//! generated for unit tests.
//!
//! # Available Repositories
//!
//! - [`GroupRepository`] - Group CRUD with cascading delete
//! - [`TransitDomainRepository`] - Redirect endpoint CRUD and lookups
//! - [`LandingDomainRepository`] - Destination CRUD, overview and counts
//! - [`CheckRepository`] - Health-check run selection and single-commit batch

pub mod check_repository;
pub mod group_repository;
pub mod landing_repository;
pub mod transit_repository;

pub use check_repository::{CheckRepository, StatusUpdate};
pub use group_repository::GroupRepository;
pub use landing_repository::{
    LandingDomainRepository, LandingFilter, LandingOverviewRow, StatusCounts,
};
pub use transit_repository::TransitDomainRepository;

#[cfg(test)]
pub use check_repository::MockCheckRepository;
#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use landing_repository::MockLandingDomainRepository;
#[cfg(test)]
pub use transit_repository::MockTransitDomainRepository;
