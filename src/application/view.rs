//! Read-only projections of a session for the presentation layer.

use serde::Serialize;

use crate::domain::catalog::Skill;
use crate::domain::foundation::{Generation, Intensity, SessionId, Timestamp};
use crate::domain::quadrant::{Quadrant, QuadrantSummary};
use crate::domain::sorting::{power_copy, Choice, Round, SortingSession, Stage, IDLE_COPY};

/// Everything a renderer needs, copied out of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: SessionId,
    pub generation: Generation,
    pub stage: Stage,
    /// When the current walk began (reset by restart)
    pub started_at: Timestamp,

    /// Prompt of the active round
    pub prompt: Option<&'static str>,
    pub current_item: Option<Skill>,
    pub current_index: usize,
    pub deck_len: usize,
    pub remaining_count: usize,

    /// Fractions 0.0 to 1.0; scale to percent when rendering
    pub progress_round1: f64,
    pub progress_round2: f64,

    pub is_pressing: bool,
    pub live_power: Intensity,
    pub press_direction: Option<Choice>,
    pub power_copy: &'static str,
    pub pending_decision: Option<Choice>,

    /// Present only in `Summary`
    pub summary: Option<SummaryView>,
    pub from_snapshot: bool,
    pub dropped_names: Vec<String>,
    pub snapshot_error: Option<String>,
}

impl SessionView {
    pub fn of(session: &SortingSession) -> Self {
        let power_copy = match session.press_direction() {
            Some(choice) => power_copy(session.live_power(), choice),
            None => IDLE_COPY,
        };

        Self {
            session_id: *session.id(),
            generation: session.generation(),
            stage: session.stage(),
            started_at: *session.started_at(),
            prompt: session.stage().round().map(|r| r.prompt()),
            current_item: session.current_item().cloned(),
            current_index: session.current_index(),
            deck_len: session.deck().len(),
            remaining_count: session.remaining_count(),
            progress_round1: session.progress(Round::Enjoy),
            progress_round2: session.progress(Round::Good),
            is_pressing: session.is_pressing(),
            live_power: session.live_power(),
            press_direction: session.press_direction(),
            power_copy,
            pending_decision: session.pending_decision(),
            summary: session.summary().map(SummaryView::of),
            from_snapshot: session.is_snapshot(),
            dropped_names: session.dropped_names().to_vec(),
            snapshot_error: session.snapshot_error().map(str::to_string),
        }
    }
}

/// The four quadrants, each ranked by total intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub quadrants: Vec<QuadrantView>,
}

impl SummaryView {
    pub fn of(summary: &QuadrantSummary) -> Self {
        let quadrants = Quadrant::ALL
            .into_iter()
            .map(|quadrant| QuadrantView {
                quadrant,
                title: quadrant.title(),
                subtitle: quadrant.subtitle(),
                skills: summary
                    .ranked(quadrant)
                    .into_iter()
                    .map(|skill| {
                        let record = summary.intensity_of(skill.name());
                        RankedSkill {
                            name: skill.name().to_string(),
                            emoji: skill.emoji().to_string(),
                            enjoy: record.enjoy,
                            good: record.good,
                            total: record.total(),
                        }
                    })
                    .collect(),
            })
            .collect();
        Self { quadrants }
    }

    pub fn quadrant(&self, quadrant: Quadrant) -> Option<&QuadrantView> {
        self.quadrants.iter().find(|q| q.quadrant == quadrant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantView {
    pub quadrant: Quadrant,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub skills: Vec<RankedSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSkill {
    pub name: String,
    pub emoji: String,
    pub enjoy: Intensity,
    pub good: Intensity,
    /// enjoy + good, 0 to 200
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, CatalogVariant};
    use std::sync::Arc;

    fn session() -> SortingSession {
        SortingSession::with_seed(Arc::new(Catalog::builtin(CatalogVariant::Full)), 11)
    }

    #[test]
    fn fresh_session_view() {
        let view = SessionView::of(&session());
        assert_eq!(view.stage, Stage::Round1);
        assert_eq!(view.prompt, Some(Round::Enjoy.prompt()));
        assert_eq!(view.deck_len, 7);
        assert_eq!(view.remaining_count, 6);
        assert_eq!(view.power_copy, IDLE_COPY);
        assert!(view.current_item.is_some());
        assert!(view.summary.is_none());
    }

    #[test]
    fn summary_view_ranks_each_quadrant() {
        let mut session = session();
        // all "yes" in both rounds, later items held longer
        for round in 0..2 {
            for i in 0..7 {
                let level = (i * 10 + round) as f64;
                session.vote(Choice::Yes, Intensity::new(level));
                session.advance();
            }
        }
        let view = SessionView::of(&session);
        let summary = view.summary.unwrap();
        let top = summary.quadrant(Quadrant::Superpowers).unwrap();
        assert_eq!(top.skills.len(), 7);
        assert_eq!(top.title, "Superpowers");
        assert!(top.skills[0].total >= top.skills[6].total);
        assert!(summary.quadrant(Quadrant::Avoid).unwrap().skills.is_empty());
    }

    #[test]
    fn view_serializes_camel_case() {
        let json = serde_json::to_value(SessionView::of(&session())).unwrap();
        assert_eq!(json["stage"], "round1");
        assert!(json.get("remainingCount").is_some());
        assert!(json.get("progressRound1").is_some());
        assert!(json["startedAt"].is_string());
    }
}
