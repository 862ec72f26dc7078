//! Background scheduling of health-check runs.
//!
//! One timer loop per process, owned by a [`SchedulerHandle`] created in
//! [`crate::server::run`] and handed to the control endpoints through
//! [`crate::state::AppState`]. The timer drives at most one run at a time;
//! manual triggers run on their own task, relying on the engine's idempotence.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{Notify, RwLock};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::application::services::HealthService;

/// Observable scheduler state, as reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStatus {
    Running { next_run: Option<DateTime<Utc>> },
    Paused,
    /// The loop has been shut down; no further timer runs will happen.
    NotFound,
}

struct SchedulerInner {
    health: Arc<HealthService>,
    interval: Duration,
    paused: AtomicBool,
    stopped: AtomicBool,
    shutdown: Notify,
    next_run: RwLock<Option<DateTime<Utc>>>,
}

/// Cloneable handle to the process-wide check scheduler.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Arc<SchedulerInner>,
}

impl SchedulerHandle {
    /// Spawns the timer loop and returns its handle. The first run happens
    /// one full interval after start.
    pub fn start(health: Arc<HealthService>, interval: Duration) -> Self {
        let inner = Arc::new(SchedulerInner {
            health,
            interval,
            paused: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
            shutdown: Notify::new(),
            next_run: RwLock::new(None),
        });

        tokio::spawn(Self::run_loop(Arc::clone(&inner)));

        info!(interval_secs = interval.as_secs(), "check scheduler started");

        Self { inner }
    }

    async fn run_loop(inner: Arc<SchedulerInner>) {
        let mut ticker = tokio::time::interval(inner.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; skip it so the initial run
        // waits a full interval.
        ticker.tick().await;

        let interval = TimeDelta::from_std(inner.interval).unwrap_or(TimeDelta::zero());
        *inner.next_run.write().await = Some(Utc::now() + interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    *inner.next_run.write().await = Some(Utc::now() + interval);

                    if inner.paused.load(Ordering::SeqCst) {
                        continue;
                    }

                    if let Err(e) = inner.health.run_check().await {
                        warn!(error = %e, "scheduled health check run failed");
                    }
                }
                _ = inner.shutdown.notified() => {
                    inner.stopped.store(true, Ordering::SeqCst);
                    info!("check scheduler stopped");
                    break;
                }
            }
        }
    }

    /// Suspends future timer runs. A run already in flight completes.
    pub fn pause(&self) {
        self.inner.paused.store(true, Ordering::SeqCst);
        info!("check scheduler paused");
    }

    /// Re-enables timer runs from the next tick.
    pub fn resume(&self) {
        self.inner.paused.store(false, Ordering::SeqCst);
        info!("check scheduler resumed");
    }

    pub async fn status(&self) -> SchedulerStatus {
        if self.inner.stopped.load(Ordering::SeqCst) {
            return SchedulerStatus::NotFound;
        }
        if self.inner.paused.load(Ordering::SeqCst) {
            return SchedulerStatus::Paused;
        }

        SchedulerStatus::Running {
            next_run: *self.inner.next_run.read().await,
        }
    }

    /// Fires one run immediately on its own task, independent of the timer
    /// and without resetting its schedule. Fire-and-forget: the outcome is
    /// logged, not returned.
    pub fn trigger(&self) {
        let health = Arc::clone(&self.inner.health);
        tokio::spawn(async move {
            match health.run_check().await {
                Ok(summary) => info!(
                    checked_transit = summary.checked_transit,
                    checked_landing = summary.checked_landing,
                    "manual health check run finished"
                ),
                Err(e) => error!(error = %e, "manual health check run failed"),
            }
        });
    }

    /// Stops the timer loop. In-flight runs complete; afterwards the status
    /// reports `NotFound`.
    pub fn shutdown(&self) {
        self.inner.shutdown.notify_one();
    }
}
