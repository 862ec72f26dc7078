//! Helper functions shared across the application:
//!
//! - [`url_list`] - Bulk URL input parsing
//! - [`transit_path`] - Random redirect-path generation

pub mod transit_path;
pub mod url_list;
