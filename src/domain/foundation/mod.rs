//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the sorting domain.

mod errors;
mod ids;
mod intensity;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{Generation, SessionId};
pub use intensity::Intensity;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
