//! Sorting module - the two-round walk over a shuffled deck.
//!
//! Round 1 asks whether each skill is enjoyed, round 2 whether it is done
//! well. Each vote carries an intensity taken from how long it was held.
//! After round 2 the walk ends in a quadrant summary.
//!
//! # Module Structure
//!
//! - `stage` - `Stage` walk states and `Round`
//! - `decision` - `Choice`, `Decision`, per-round `DecisionMap`
//! - `deck` - shuffled working order of the catalog
//! - `gauge` - hold duration to intensity
//! - `outcome` - results of session operations
//! - `session` - `SortingSession` aggregate

mod decision;
mod deck;
mod gauge;
mod outcome;
mod session;
mod stage;

pub use decision::{Choice, Decision, DecisionMap};
pub use deck::Deck;
pub use gauge::{power_copy, IntensityGauge, Press, DEFAULT_MAX_PRESS, IDLE_COPY};
pub use outcome::{AdvanceOutcome, IgnoreReason, PressOutcome, VoteOutcome};
pub use session::SortingSession;
pub use stage::{Round, Stage};

use std::time::Duration;

/// Reference delay between a vote and its advance.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(400);

/// Reference press sampling interval (about 60 Hz).
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(16);
