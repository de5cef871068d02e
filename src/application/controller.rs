//! SortingController - drives one session against real time.
//!
//! The controller is the only writer of the shared session. It turns input
//! gestures into session operations and schedules the follow-up work:
//!
//! 1. `begin_press` starts the gauge sampler
//! 2. `release_press` (or `vote`/`tap`) records a vote and schedules the advance
//! 3. `restart` aborts everything scheduled, reshuffles and clears the
//!    `data` parameter from the location

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::scheduler::{clock_now, SchedulerConfig, SessionScheduler};
use super::share::{strip_query_param, ShareLink};
use super::view::SessionView;
use crate::config::AppConfig;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, Generation, Intensity};
use crate::domain::snapshot;
use crate::domain::sorting::{
    Choice, IntensityGauge, PressOutcome, SortingSession, Stage, VoteOutcome, DEFAULT_MAX_PRESS,
};
use crate::ports::{Location, DATA_PARAM};

/// Settings for a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub press_max_duration: Duration,
    pub scheduler: SchedulerConfig,
    /// Base of outbound share links.
    pub share_base_url: String,
    /// Fixed shuffle seed, ignored when a snapshot is opened.
    pub shuffle_seed: Option<u64>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            press_max_duration: DEFAULT_MAX_PRESS,
            scheduler: SchedulerConfig::default(),
            share_base_url: "http://localhost:5173/".to_string(),
            shuffle_seed: None,
        }
    }
}

impl From<&AppConfig> for ControllerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            press_max_duration: config.sorter.press_max_duration(),
            scheduler: SchedulerConfig::from(&config.sorter),
            share_base_url: config.share.base_url.clone(),
            shuffle_seed: config.sorter.shuffle_seed,
        }
    }
}

/// Owns a session, its timers and the location it was opened from.
pub struct SortingController {
    session: Arc<Mutex<SortingSession>>,
    scheduler: Mutex<SessionScheduler>,
    location: Arc<dyn Location>,
    config: ControllerConfig,
}

impl SortingController {
    /// Opens a session for the current location.
    ///
    /// A `data` parameter short-circuits to the snapshot's summary (or to
    /// `Error` if it is malformed); otherwise a fresh walk starts.
    pub fn open(catalog: Arc<Catalog>, location: Arc<dyn Location>, config: ControllerConfig) -> Self {
        let session = match location.query_param(DATA_PARAM) {
            Some(token) => {
                info!(href = %location.href(), "Opening shared snapshot");
                SortingSession::from_snapshot(catalog, &token)
            }
            None => match config.shuffle_seed {
                Some(seed) => SortingSession::with_seed(catalog, seed),
                None => SortingSession::new(catalog),
            },
        };
        Self::with_session(session, location, config)
    }

    /// Wraps an existing session.
    pub fn with_session(
        session: SortingSession,
        location: Arc<dyn Location>,
        config: ControllerConfig,
    ) -> Self {
        let session = session.with_gauge(IntensityGauge::new(config.press_max_duration));
        Self {
            session: Arc::new(Mutex::new(session)),
            scheduler: Mutex::new(SessionScheduler::new(config.scheduler)),
            location,
            config,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a hold and the sampler that feeds the live power level.
    pub async fn begin_press(&self, choice: Choice) -> PressOutcome {
        let outcome = self.session.lock().await.begin_press(choice, clock_now());
        if matches!(outcome, PressOutcome::Started { .. }) {
            self.scheduler
                .lock()
                .await
                .start_sampler(self.session.clone());
        }
        outcome
    }

    /// Ends a hold; a committed vote schedules its advance.
    pub async fn release_press(&self, choice: Choice) -> PressOutcome {
        let outcome = self.session.lock().await.release_press(choice, clock_now());
        match &outcome {
            PressOutcome::Released(vote) => {
                let mut scheduler = self.scheduler.lock().await;
                scheduler.stop_sampler();
                if let Some(ticket) = vote.ticket() {
                    scheduler.schedule_advance(self.session.clone(), ticket);
                }
            }
            PressOutcome::Cancelled => self.scheduler.lock().await.stop_sampler(),
            _ => {}
        }
        outcome
    }

    /// Drops the active hold without voting.
    pub async fn cancel_press(&self) -> PressOutcome {
        let outcome = self.session.lock().await.cancel_press();
        self.scheduler.lock().await.stop_sampler();
        outcome
    }

    /// Votes directly, bypassing the gauge.
    pub async fn vote(&self, choice: Choice, intensity: Intensity) -> VoteOutcome {
        let outcome = self.session.lock().await.vote(choice, intensity);
        self.after_vote(&outcome).await;
        outcome
    }

    /// A click: "yes" at zero intensity.
    pub async fn tap(&self) -> VoteOutcome {
        let outcome = self.session.lock().await.tap();
        self.after_vote(&outcome).await;
        outcome
    }

    async fn after_vote(&self, outcome: &VoteOutcome) {
        if let Some(ticket) = outcome.ticket() {
            let mut scheduler = self.scheduler.lock().await;
            scheduler.stop_sampler();
            scheduler.schedule_advance(self.session.clone(), ticket);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Walk replacement
    // ─────────────────────────────────────────────────────────────────────────

    /// Aborts scheduled work, reshuffles, and clears `data` from the location.
    pub async fn restart(&self) -> Generation {
        self.scheduler.lock().await.cancel_all();
        let generation = self.session.lock().await.restart();

        let href = self.location.href();
        let cleared = strip_query_param(&href, DATA_PARAM);
        if cleared != href {
            if let Err(err) = self.location.replace(&cleared) {
                warn!(error = %err, "Failed to clear snapshot parameter");
            }
        }
        generation
    }

    /// Replaces the walk with a snapshot that arrived after opening.
    pub async fn load_snapshot(&self, token: &str) -> Stage {
        self.scheduler.lock().await.cancel_all();
        self.session.lock().await.ingest_snapshot(token)
    }

    /// Aborts every scheduled task.
    pub async fn shutdown(&self) {
        self.scheduler.lock().await.cancel_all();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn view(&self) -> SessionView {
        SessionView::of(&*self.session.lock().await)
    }

    pub async fn stage(&self) -> Stage {
        self.session.lock().await.stage()
    }

    /// Link to the current summary, once there is one.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSnapshot` if the summary cannot be encoded.
    pub async fn share_link(&self) -> Result<Option<ShareLink>, DomainError> {
        let session = self.session.lock().await;
        let Some(summary) = session.summary() else {
            return Ok(None);
        };
        let token = snapshot::encode(summary)?;
        Ok(Some(ShareLink::build(&self.config.share_base_url, &token)))
    }

    /// Runs `f` against the session under its lock.
    pub async fn inspect<R>(&self, f: impl FnOnce(&SortingSession) -> R) -> R {
        f(&*self.session.lock().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryLocation;
    use crate::domain::catalog::CatalogVariant;
    use crate::domain::sorting::Round;
    use tokio::time;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::builtin(CatalogVariant::Full))
    }

    fn location(href: &str) -> Arc<InMemoryLocation> {
        Arc::new(InMemoryLocation::new(href).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn open_without_data_starts_round1() {
        let controller = SortingController::open(
            catalog(),
            location("http://localhost:5173/"),
            ControllerConfig::default(),
        );
        assert_eq!(controller.stage().await, Stage::Round1);
        assert!(controller.share_link().await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn open_with_bad_data_lands_in_error() {
        let controller = SortingController::open(
            catalog(),
            location("http://localhost:5173/?data=bm9wZQ"),
            ControllerConfig::default(),
        );
        let view = controller.view().await;
        assert_eq!(view.stage, Stage::Error);
        assert!(view.snapshot_error.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn tap_advances_after_delay() {
        let controller = SortingController::open(
            catalog(),
            location("http://localhost:5173/"),
            ControllerConfig::default(),
        );
        assert!(controller.tap().await.is_recorded());
        assert!(controller.view().await.pending_decision.is_some());

        time::sleep(Duration::from_millis(450)).await;

        let view = controller.view().await;
        assert_eq!(view.current_index, 1);
        assert!(view.pending_decision.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn held_press_commits_gauge_level() {
        let controller = SortingController::open(
            catalog(),
            location("http://localhost:5173/"),
            ControllerConfig::default(),
        );
        controller.begin_press(Choice::Yes).await;
        time::sleep(Duration::from_millis(600)).await;
        let outcome = controller.release_press(Choice::Yes).await;

        let PressOutcome::Released(VoteOutcome::Recorded { intensity, .. }) = outcome else {
            panic!("expected a recorded vote, got {:?}", outcome);
        };
        assert!((intensity.value() - 60.0).abs() < 1e-6);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_clears_data_param_and_pending_advance() {
        let loc = location("http://localhost:5173/?data=bm9wZQ");
        let controller =
            SortingController::open(catalog(), loc.clone(), ControllerConfig::default());

        controller.restart().await;
        assert_eq!(loc.href(), "http://localhost:5173/");
        assert_eq!(controller.stage().await, Stage::Round1);

        controller.tap().await;
        controller.restart().await;
        time::sleep(Duration::from_secs(1)).await;

        let index = controller.inspect(|s| s.current_index()).await;
        assert_eq!(index, 0);
        let decided = controller.inspect(|s| s.decisions(Round::Enjoy).len()).await;
        assert_eq!(decided, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_press_duration_reaches_gauge() {
        let config = ControllerConfig {
            press_max_duration: Duration::from_millis(2000),
            ..Default::default()
        };
        let controller =
            SortingController::open(catalog(), location("http://localhost:5173/"), config);
        controller.begin_press(Choice::No).await;
        time::sleep(Duration::from_millis(1000)).await;
        let outcome = controller.release_press(Choice::No).await;
        let PressOutcome::Released(VoteOutcome::Recorded { intensity, .. }) = outcome else {
            panic!("expected a recorded vote, got {:?}", outcome);
        };
        assert!((intensity.value() - 50.0).abs() < 1e-6);
    }
}
