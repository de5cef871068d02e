//! Domain layer containing the sorting rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Skill records and the validated catalog
//! - `sorting` - Deck, intensity gauge and the two-round session
//! - `quadrant` - Quadrant classification and summaries
//! - `snapshot` - Shareable token codec

pub mod catalog;
pub mod foundation;
pub mod quadrant;
pub mod snapshot;
pub mod sorting;
