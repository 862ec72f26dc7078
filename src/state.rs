//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{GroupService, ResolverService};
use crate::scheduler::SchedulerHandle;

#[derive(Clone)]
pub struct AppState {
    pub group_service: Arc<GroupService>,
    pub resolver_service: Arc<ResolverService>,
    pub scheduler: SchedulerHandle,
}
