//! Core domain entities for the rotation data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`Group`] - A named pool of transit and landing domains
//! - [`TransitDomain`] - A public redirect endpoint (hostname + path)
//! - [`LandingDomain`] - A final destination URL
//! - [`DomainStatus`] - Shared health classification
//!
//! Creation inputs use separate `New*` structs; listing projections
//! (e.g. [`GroupWithCounts`]) live next to the entity they project.

pub mod group;
pub mod landing_domain;
pub mod status;
pub mod transit_domain;

pub use group::{Group, GroupWithCounts};
pub use landing_domain::{LandingDomain, NewLandingDomain};
pub use status::DomainStatus;
pub use transit_domain::{NewTransitDomain, TransitDomain};
