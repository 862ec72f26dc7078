//! Group and domain pool management.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{
    Group, GroupWithCounts, LandingDomain, NewLandingDomain, NewTransitDomain, TransitDomain,
};
use crate::domain::repositories::{
    GroupRepository, LandingDomainRepository, LandingFilter, LandingOverviewRow, StatusCounts,
    TransitDomainRepository,
};
use crate::error::AppError;
use crate::utils::transit_path::{generate_random_path, random_path_length};

const DEFAULT_TRANSIT_PATH: &str = "/go";
const MAX_GROUP_NAME_LEN: usize = 100;

/// Path policy for a batch of new transit domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// Every entry gets `/go`.
    Default,
    /// Every entry gets the same operator-chosen path.
    Custom(String),
    /// Every entry gets its own random 5-8 character path.
    Random,
}

impl PathSpec {
    /// Builds the policy from the request fields, normalizing custom paths to
    /// a leading slash. Unknown `path_type` values fall back to the default
    /// path.
    pub fn from_request(path_type: Option<&str>, custom_path: Option<String>) -> Self {
        match path_type {
            Some("custom") => {
                let path = custom_path.unwrap_or_default();
                let path = if path.is_empty() {
                    "/custom".to_string()
                } else if path.starts_with('/') {
                    path
                } else {
                    format!("/{path}")
                };
                PathSpec::Custom(path)
            }
            Some("random") => PathSpec::Random,
            _ => PathSpec::Default,
        }
    }

    /// The path for the next entry in the batch.
    fn next_path(&self) -> String {
        match self {
            PathSpec::Default => DEFAULT_TRANSIT_PATH.to_string(),
            PathSpec::Custom(path) => path.clone(),
            PathSpec::Random => generate_random_path(random_path_length()),
        }
    }
}

/// Outcome of a bulk transit-domain add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddReport {
    pub added: usize,
    /// Entries whose `(url, path)` pair already existed.
    pub skipped: usize,
}

pub struct GroupService {
    group_repo: Arc<dyn GroupRepository>,
    transit_repo: Arc<dyn TransitDomainRepository>,
    landing_repo: Arc<dyn LandingDomainRepository>,
}

impl GroupService {
    pub fn new(
        group_repo: Arc<dyn GroupRepository>,
        transit_repo: Arc<dyn TransitDomainRepository>,
        landing_repo: Arc<dyn LandingDomainRepository>,
    ) -> Self {
        Self {
            group_repo,
            transit_repo,
            landing_repo,
        }
    }

    /// Creates a group with a unique name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or oversized name and
    /// [`AppError::Conflict`] when the name is taken.
    pub async fn create_group(&self, name: &str) -> Result<Group, AppError> {
        let name = name.trim();

        if name.is_empty() || name.len() > MAX_GROUP_NAME_LEN {
            return Err(AppError::bad_request(
                "Invalid group name length",
                json!({ "min": 1, "max": MAX_GROUP_NAME_LEN }),
            ));
        }

        if self.group_repo.find_by_name(name).await?.is_some() {
            return Err(AppError::conflict(
                "Group name already exists",
                json!({ "name": name }),
            ));
        }

        self.group_repo.create(name).await
    }

    pub async fn list_groups(&self) -> Result<Vec<GroupWithCounts>, AppError> {
        self.group_repo.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the group does not exist.
    pub async fn get_group(&self, id: i64) -> Result<Group, AppError> {
        self.group_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Group not found", json!({ "id": id })))
    }

    /// Group plus both of its domain sets.
    pub async fn group_detail(
        &self,
        id: i64,
    ) -> Result<(Group, Vec<TransitDomain>, Vec<LandingDomain>), AppError> {
        let group = self.get_group(id).await?;
        let transit = self.transit_repo.list_by_group(id).await?;
        let landing = self.landing_repo.list_by_group(id).await?;

        Ok((group, transit, landing))
    }

    /// Deletes a group and everything it owns. Returns the deleted group so
    /// callers can name it in their response.
    pub async fn delete_group(&self, id: i64) -> Result<Group, AppError> {
        let group = self.get_group(id).await?;
        self.group_repo.delete(id).await?;

        Ok(group)
    }

    /// Bulk-adds landing domains; URLs already registered anywhere are
    /// silently skipped (they are globally unique). Returns the number added.
    pub async fn add_landing_domains(
        &self,
        group_id: i64,
        urls: Vec<String>,
    ) -> Result<usize, AppError> {
        self.get_group(group_id).await?;

        let mut added = 0;
        for url in urls {
            let url = url.trim();
            if url.is_empty() || self.landing_repo.exists(url).await? {
                continue;
            }

            self.landing_repo
                .create(NewLandingDomain {
                    url: url.to_string(),
                    group_id,
                })
                .await?;
            added += 1;
        }

        Ok(added)
    }

    /// Bulk-adds transit domains under the given path policy. Entries whose
    /// `(url, path)` pair already exists are skipped and counted.
    pub async fn add_transit_domains(
        &self,
        group_id: i64,
        urls: Vec<String>,
        spec: &PathSpec,
    ) -> Result<AddReport, AppError> {
        self.get_group(group_id).await?;

        let mut report = AddReport {
            added: 0,
            skipped: 0,
        };

        for url in urls {
            let url = url.trim();
            if url.is_empty() {
                continue;
            }

            let path = spec.next_path();
            if self.transit_repo.exists(url, &path).await? {
                report.skipped += 1;
                continue;
            }

            self.transit_repo
                .create(NewTransitDomain {
                    url: url.to_string(),
                    path,
                    group_id,
                })
                .await?;
            report.added += 1;
        }

        Ok(report)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no transit domain has that id.
    pub async fn delete_transit_domain(&self, id: i64) -> Result<(), AppError> {
        if !self.transit_repo.delete(id).await? {
            return Err(AppError::not_found(
                "Transit domain not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Bulk delete of landing domains; returns the number removed.
    pub async fn delete_landing_domains(&self, ids: &[i64]) -> Result<u64, AppError> {
        self.landing_repo.delete_many(ids).await
    }

    /// Paginated cross-group overview with its unpaginated total.
    pub async fn landing_overview(
        &self,
        filter: &LandingFilter,
    ) -> Result<(Vec<LandingOverviewRow>, i64), AppError> {
        let rows = self.landing_repo.list_overview(filter).await?;
        let total = self.landing_repo.count_overview(filter).await?;

        Ok((rows, total))
    }

    pub async fn stats(&self) -> Result<StatusCounts, AppError> {
        self.landing_repo.status_counts().await
    }
}
