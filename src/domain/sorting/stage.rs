//! Stage and Round enums for the sorting walk.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// One full pass over the deck judging a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    /// Round 1: do you enjoy this skill?
    Enjoy,
    /// Round 2: are you good at this skill?
    Good,
}

impl Round {
    /// The stage in which this round is voted.
    pub fn stage(&self) -> Stage {
        match self {
            Round::Enjoy => Stage::Round1,
            Round::Good => Stage::Round2,
        }
    }

    /// Prompt shown while the round is active.
    pub fn prompt(&self) -> &'static str {
        match self {
            Round::Enjoy => "Round 1: Do you ENJOY this skill?",
            Round::Good => "Round 2: Are you GOOD at this skill?",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Round::Enjoy => "Enjoy",
            Round::Good => "Good",
        };
        write!(f, "{}", s)
    }
}

/// Where a session is in its walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Round1,
    Round2,
    Summary,
    Error,
}

impl Stage {
    /// The round being voted in this stage, if any.
    pub fn round(&self) -> Option<Round> {
        match self {
            Stage::Round1 => Some(Round::Enjoy),
            Stage::Round2 => Some(Round::Good),
            Stage::Summary | Stage::Error => None,
        }
    }

    /// Returns true while votes are accepted.
    pub fn is_voting(&self) -> bool {
        self.round().is_some()
    }
}

impl StateMachine for Stage {
    /// Walk edges only. Restart and snapshot ingestion replace the walk
    /// wholesale and do not go through this table.
    fn can_transition_to(&self, target: &Self) -> bool {
        use Stage::*;
        matches!((self, target), (Round1, Round2) | (Round2, Summary))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Round1 => vec![Round2],
            Round2 => vec![Summary],
            Summary | Error => vec![],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Round1 => "round1",
            Stage::Round2 => "round2",
            Stage::Summary => "summary",
            Stage::Error => "error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Stage; 4] = [Stage::Round1, Stage::Round2, Stage::Summary, Stage::Error];

    #[test]
    fn default_is_round1() {
        assert_eq!(Stage::default(), Stage::Round1);
    }

    #[test]
    fn walk_is_linear() {
        assert_eq!(Stage::Round1.transition_to(Stage::Round2), Ok(Stage::Round2));
        assert_eq!(Stage::Round2.transition_to(Stage::Summary), Ok(Stage::Summary));
    }

    #[test]
    fn walk_cannot_skip_round2() {
        assert!(Stage::Round1.transition_to(Stage::Summary).is_err());
    }

    #[test]
    fn walk_cannot_go_backwards() {
        assert!(Stage::Round2.transition_to(Stage::Round1).is_err());
        assert!(Stage::Summary.transition_to(Stage::Round2).is_err());
    }

    #[test]
    fn summary_and_error_are_terminal() {
        assert!(Stage::Summary.is_terminal());
        assert!(Stage::Error.is_terminal());
        assert!(!Stage::Round1.is_terminal());
        assert!(!Stage::Round2.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn only_rounds_accept_votes() {
        assert_eq!(Stage::Round1.round(), Some(Round::Enjoy));
        assert_eq!(Stage::Round2.round(), Some(Round::Good));
        assert!(!Stage::Summary.is_voting());
        assert!(!Stage::Error.is_voting());
    }

    #[test]
    fn round_maps_back_to_stage() {
        assert_eq!(Round::Enjoy.stage(), Stage::Round1);
        assert_eq!(Round::Good.stage(), Stage::Round2);
    }

    #[test]
    fn stage_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Stage::Round2).unwrap(), "\"round2\"");
        assert_eq!(serde_json::to_string(&Stage::Error).unwrap(), "\"error\"");
    }
}
