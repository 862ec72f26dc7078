//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod domains;
pub mod groups;
pub mod redirect;
pub mod stats;
pub mod tasks;

pub use domains::{delete_domains_handler, delete_transit_domain_handler, list_domains_handler};
pub use groups::{
    add_landing_domains_handler, add_transit_domains_handler, create_group_handler,
    delete_group_handler, group_detail_handler, list_groups_handler,
};
pub use redirect::{redirect_handler, test_redirect_handler};
pub use stats::stats_handler;
pub use tasks::{
    run_check_handler, scheduler_pause_handler, scheduler_resume_handler, scheduler_status_handler,
};
