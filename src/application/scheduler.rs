//! SessionScheduler - the timers around a sorting session.
//!
//! Two kinds of deferred work exist:
//!
//! | Task | Cadence | Stops when |
//! |------|---------|------------|
//! | press sampler | `sample_interval` (16ms) | press released, cancelled or abandoned |
//! | delayed advance | once, after `advance_delay` (400ms) | fired or aborted |
//!
//! Every task is keyed to the generation it was scheduled under. `cancel_all`
//! aborts whatever is still running; a task that slips past the abort still
//! finds its generation stale and does nothing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::config::SorterConfig;
use crate::domain::foundation::Generation;
use crate::domain::sorting::{
    AdvanceOutcome, PressOutcome, SortingSession, DEFAULT_ADVANCE_DELAY, DEFAULT_SAMPLE_INTERVAL,
};

/// Shortest sampler period; `tokio::time::interval` rejects zero.
const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

/// Current time on the tokio clock, as a std `Instant`.
///
/// Follows paused and advanced time in tests.
pub fn clock_now() -> Instant {
    time::Instant::now().into_std()
}

/// Timings for the scheduled tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// How often an active press is sampled.
    pub sample_interval: Duration,

    /// Delay between a recorded vote and its advance.
    pub advance_delay: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }
}

impl SchedulerConfig {
    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }
}

impl From<&SorterConfig> for SchedulerConfig {
    fn from(config: &SorterConfig) -> Self {
        Self {
            sample_interval: config.sample_interval(),
            advance_delay: config.advance_delay(),
        }
    }
}

/// Owns the sampler and advance tasks of one session.
pub struct SessionScheduler {
    config: SchedulerConfig,
    sampler: Option<JoinHandle<()>>,
    advances: Vec<JoinHandle<()>>,
}

impl SessionScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            sampler: None,
            advances: Vec::new(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Samples the active press every `sample_interval` until it ends.
    ///
    /// Replaces any sampler already running. Periods below 1ms are raised
    /// to 1ms.
    pub fn start_sampler(&mut self, session: Arc<Mutex<SortingSession>>) {
        self.stop_sampler();
        let period = self.config.sample_interval.max(MIN_SAMPLE_INTERVAL);

        self.sampler = Some(tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut session = session.lock().await;
                match session.sample_press(clock_now()) {
                    PressOutcome::Sampled(_) => {}
                    outcome => {
                        debug!(?outcome, "Press sampler stopped");
                        break;
                    }
                }
            }
        }));
    }

    pub fn stop_sampler(&mut self) {
        if let Some(handle) = self.sampler.take() {
            handle.abort();
        }
    }

    /// Runs `advance_for(ticket)` once `advance_delay` has passed.
    pub fn schedule_advance(&mut self, session: Arc<Mutex<SortingSession>>, ticket: Generation) {
        self.advances.retain(|handle| !handle.is_finished());
        let delay = self.config.advance_delay;

        self.advances.push(tokio::spawn(async move {
            time::sleep(delay).await;
            let outcome = session.lock().await.advance_for(ticket);
            if let AdvanceOutcome::Ignored(reason) = outcome {
                debug!(ticket = ticket.value(), %reason, "Scheduled advance ignored");
            }
        }));
    }

    /// Aborts the sampler and every pending advance.
    pub fn cancel_all(&mut self) {
        self.stop_sampler();
        let aborted = self.advances.len();
        for handle in self.advances.drain(..) {
            handle.abort();
        }
        if aborted > 0 {
            debug!(aborted, "Scheduled advances aborted");
        }
    }

    /// Tasks that have not finished yet.
    pub fn active_tasks(&self) -> usize {
        let sampler = self.sampler.iter().filter(|h| !h.is_finished()).count();
        let advances = self.advances.iter().filter(|h| !h.is_finished()).count();
        sampler + advances
    }
}

impl Drop for SessionScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
