//! Snapshot codec for shareable result links.
//!
//! A token is the URL-safe, unpadded base64 of a UTF-8 JSON record:
//!
//! ```text
//! {
//!   "superpowers": ["Connector"],
//!   "growth": [],
//!   "burnout": ["Deep Diver"],
//!   "avoid": [],
//!   "intensity": { "Connector": { "enjoy": 80, "good": 50 }, ... }
//! }
//! ```
//!
//! Only the four list keys decide validity. Names are rejoined against the
//! catalog on decode; unknown names are dropped and reported, never fatal.
//! `intensity` is optional and malformed entries read as zero.

mod codec;
mod errors;
mod token;

pub use codec::{decode, encode, DecodedSnapshot};
pub use errors::SnapshotError;
pub use token::SnapshotToken;
