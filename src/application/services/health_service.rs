//! Health-check engine: probes every eligible domain and commits one batch
//! of status updates per run.

use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::domain::repositories::{CheckRepository, StatusUpdate};
use crate::error::AppError;
use crate::infrastructure::probe::SafetyProber;

/// Counts reported after a run, for logs and manual-trigger feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRunSummary {
    pub checked_transit: usize,
    pub checked_landing: usize,
}

pub struct HealthService {
    check_repo: Arc<dyn CheckRepository>,
    prober: Arc<dyn SafetyProber>,
    /// When set, `unsafe` rows are re-probed too instead of being skipped.
    recheck_unsafe: bool,
    probe_concurrency: usize,
}

impl HealthService {
    pub fn new(
        check_repo: Arc<dyn CheckRepository>,
        prober: Arc<dyn SafetyProber>,
        recheck_unsafe: bool,
        probe_concurrency: usize,
    ) -> Self {
        Self {
            check_repo,
            prober,
            recheck_unsafe,
            probe_concurrency: probe_concurrency.max(1),
        }
    }

    /// Runs one health-check pass over all eligible domains.
    ///
    /// Transit domains are probed at `url + path`, landing domains at their
    /// bare url. One domain's probe outcome never affects another's; the
    /// collected updates are committed in a single batch after all probes
    /// complete. Safe to invoke concurrently with itself and with resolver
    /// traffic.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself fails; probe failures are
    /// classified `unsafe`, never raised.
    pub async fn run_check(&self) -> Result<CheckRunSummary, AppError> {
        let transit = self.check_repo.due_transit(self.recheck_unsafe).await?;
        let landing = self.check_repo.due_landing(self.recheck_unsafe).await?;

        info!(
            transit = transit.len(),
            landing = landing.len(),
            "starting domain health check run"
        );

        let transit_targets: Vec<(i64, String)> =
            transit.iter().map(|d| (d.id, d.probe_target())).collect();
        let landing_targets: Vec<(i64, String)> =
            landing.iter().map(|d| (d.id, d.url.clone())).collect();

        let transit_updates = self.probe_batch(transit_targets).await;
        let landing_updates = self.probe_batch(landing_targets).await;

        self.check_repo
            .commit_run(&transit_updates, &landing_updates)
            .await?;

        let summary = CheckRunSummary {
            checked_transit: transit_updates.len(),
            checked_landing: landing_updates.len(),
        };

        info!(
            checked_transit = summary.checked_transit,
            checked_landing = summary.checked_landing,
            "domain health check run finished"
        );

        Ok(summary)
    }

    /// Probes a batch of `(id, target)` pairs with a bounded number of
    /// in-flight requests. A panicked probe task is logged and dropped from
    /// the batch; the remaining domains are unaffected.
    async fn probe_batch(&self, targets: Vec<(i64, String)>) -> Vec<StatusUpdate> {
        let mut pending = targets.into_iter();
        let mut in_flight = JoinSet::new();
        let mut updates = Vec::new();

        loop {
            while in_flight.len() < self.probe_concurrency {
                let Some((id, target)) = pending.next() else {
                    break;
                };
                let prober = Arc::clone(&self.prober);
                in_flight.spawn(async move {
                    let verdict = prober.probe(&target).await;
                    StatusUpdate {
                        id,
                        status: verdict.status(),
                        checked_at: Utc::now(),
                    }
                });
            }

            match in_flight.join_next().await {
                Some(Ok(update)) => updates.push(update),
                Some(Err(e)) => warn!(error = %e, "probe task failed"),
                None => break,
            }
        }

        updates
    }
}
