//! Results of session operations.
//!
//! Out-of-protocol input (a late vote, a stale advance, a press on the wrong
//! direction) is not an error. It comes back as `Ignored` with the reason.

use serde::Serialize;
use std::fmt;

use super::{Choice, Round};
use crate::domain::foundation::{Generation, Intensity};

/// Why an operation left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Stage is Summary or Error.
    NotVoting,
    /// The index is past the end of the deck.
    NoCurrentItem,
    /// A vote is waiting for its advance.
    DecisionPending,
    /// `advance` called with no vote waiting.
    NothingPending,
    /// The ticket belongs to a replaced walk.
    StaleGeneration,
    /// A press is already held.
    AlreadyPressing,
    /// No press is held.
    NotPressing,
    /// Release of the direction that is not held.
    DirectionMismatch,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IgnoreReason::NotVoting => "not voting",
            IgnoreReason::NoCurrentItem => "no current item",
            IgnoreReason::DecisionPending => "decision pending",
            IgnoreReason::NothingPending => "nothing pending",
            IgnoreReason::StaleGeneration => "stale generation",
            IgnoreReason::AlreadyPressing => "already pressing",
            IgnoreReason::NotPressing => "not pressing",
            IgnoreReason::DirectionMismatch => "direction mismatch",
        };
        write!(f, "{}", s)
    }
}

/// Result of `vote` and `tap`.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    Recorded {
        round: Round,
        name: String,
        choice: Choice,
        intensity: Intensity,
        /// Ticket for the delayed advance.
        generation: Generation,
    },
    Ignored(IgnoreReason),
}

impl VoteOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, VoteOutcome::Recorded { .. })
    }

    /// The generation to hand to `advance_for`, if a vote was recorded.
    pub fn ticket(&self) -> Option<Generation> {
        match self {
            VoteOutcome::Recorded { generation, .. } => Some(*generation),
            VoteOutcome::Ignored(_) => None,
        }
    }
}

/// Result of `advance` and `advance_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next item of the same round.
    NextItem { index: usize },
    /// Round 1 finished; round 2 starts at index 0.
    NextRound { round: Round },
    /// Round 2 finished; the summary is ready.
    Completed,
    Ignored(IgnoreReason),
}

impl AdvanceOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, AdvanceOutcome::Ignored(_))
    }
}

/// Result of the press operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PressOutcome {
    Started { choice: Choice, generation: Generation },
    /// Live level after a sample.
    Sampled(Intensity),
    /// The press committed a vote.
    Released(VoteOutcome),
    /// The press was abandoned without a vote.
    Cancelled,
    Ignored(IgnoreReason),
}

impl PressOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, PressOutcome::Ignored(_))
    }
}
