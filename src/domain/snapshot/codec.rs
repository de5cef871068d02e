//! Encode and decode snapshot tokens.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{SnapshotError, SnapshotToken};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::Intensity;
use crate::domain::quadrant::{IntensityRecord, Quadrant, QuadrantSummary};

const INTENSITY_KEY: &str = "intensity";

#[derive(Serialize)]
struct WireRecord<'a> {
    superpowers: Vec<&'a str>,
    growth: Vec<&'a str>,
    burnout: Vec<&'a str>,
    avoid: Vec<&'a str>,
    intensity: BTreeMap<&'a str, WireIntensity>,
}

#[derive(Serialize)]
struct WireIntensity {
    enjoy: f64,
    good: f64,
}

/// A decoded token rejoined against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSnapshot {
    pub summary: QuadrantSummary,
    /// Entries that did not match a catalog skill, in token order.
    pub dropped: Vec<String>,
}

/// Encodes a summary into a URL-safe token.
///
/// Only names and the `{enjoy, good}` intensities are stored; totals are
/// derived again on decode.
pub fn encode(summary: &QuadrantSummary) -> Result<SnapshotToken, SnapshotError> {
    let mut intensity = BTreeMap::new();
    for quadrant in Quadrant::ALL {
        for skill in summary.skills(quadrant) {
            let record = summary.intensity_of(skill.name());
            intensity.insert(
                skill.name(),
                WireIntensity {
                    enjoy: record.enjoy.value(),
                    good: record.good.value(),
                },
            );
        }
    }

    let wire = WireRecord {
        superpowers: summary.names(Quadrant::Superpowers),
        growth: summary.names(Quadrant::Growth),
        burnout: summary.names(Quadrant::Burnout),
        avoid: summary.names(Quadrant::Avoid),
        intensity,
    };

    let json = serde_json::to_vec(&wire)?;
    Ok(SnapshotToken::from(URL_SAFE_NO_PAD.encode(json)))
}

/// Decodes a token and rejoins its names against the catalog.
///
/// Fails only when the token cannot be read or a quadrant list is missing
/// or not a list. Unknown or non-string names are dropped; a name listed
/// more than once keeps its first position (quadrant order).
pub fn decode(token: &str, catalog: &Catalog) -> Result<DecodedSnapshot, SnapshotError> {
    let record = parse_record(token)?;
    let lists = validate_lists(&record)?;
    let intensities = record.get(INTENSITY_KEY).and_then(Value::as_object);

    let mut summary = QuadrantSummary::new();
    let mut dropped = Vec::new();

    for (quadrant, items) in lists {
        for item in items {
            let Some(name) = item.as_str() else {
                dropped.push(item.to_string());
                continue;
            };
            let Some(skill) = catalog.find(name) else {
                dropped.push(name.to_string());
                continue;
            };
            let entry = intensities
                .and_then(|m| m.get(name))
                .map(read_intensity)
                .unwrap_or_default();
            if !summary.insert(quadrant, skill.clone(), entry) {
                tracing::debug!(name, quadrant = quadrant.key(), "Skipping repeated snapshot entry");
            }
        }
    }

    Ok(DecodedSnapshot { summary, dropped })
}

/// Steps 1-2: undo the URL-safe transform, restore padding, parse JSON.
fn parse_record(token: &str) -> Result<Map<String, Value>, SnapshotError> {
    let mut standard: String = token
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    let bytes = STANDARD.decode(standard.as_bytes())?;
    let text = String::from_utf8(bytes)?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => Ok(map),
        _ => Err(SnapshotError::NotAnObject),
    }
}

/// Step 3: all four list keys present and holding arrays.
fn validate_lists(record: &Map<String, Value>) -> Result<Vec<(Quadrant, &Vec<Value>)>, SnapshotError> {
    Quadrant::ALL
        .into_iter()
        .map(|quadrant| match record.get(quadrant.key()) {
            None => Err(SnapshotError::MissingList(quadrant.key())),
            Some(Value::Array(items)) => Ok((quadrant, items)),
            Some(_) => Err(SnapshotError::ListNotArray(quadrant.key())),
        })
        .collect()
}

fn read_intensity(entry: &Value) -> IntensityRecord {
    let axis = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_f64)
            .map(Intensity::new)
            .unwrap_or(Intensity::ZERO)
    };
    IntensityRecord::new(axis("enjoy"), axis("good"))
}
