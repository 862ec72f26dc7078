//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-bound queries against a shared connection pool.
//!
//! # Repositories
//!
//! - [`SqliteGroupRepository`] - Group storage with cascading delete
//! - [`SqliteTransitRepository`] - Transit domain storage and lookups
//! - [`SqliteLandingRepository`] - Landing domain storage, overview, counts
//! - [`SqliteCheckRepository`] - Health-check selection and batched commit

pub mod sqlite_check_repository;
pub mod sqlite_group_repository;
pub mod sqlite_landing_repository;
pub mod sqlite_transit_repository;

pub use sqlite_check_repository::SqliteCheckRepository;
pub use sqlite_group_repository::SqliteGroupRepository;
pub use sqlite_landing_repository::SqliteLandingRepository;
pub use sqlite_transit_repository::SqliteTransitRepository;
