//! Application layer - orchestration around the sorting session.
//!
//! - `controller` - `SortingController`, the single writer of a session
//! - `scheduler` - cancellable press sampler and delayed advance
//! - `share` - outbound share links and location rewriting
//! - `view` - read-only projections for rendering

pub mod controller;
pub mod scheduler;
pub mod share;
pub mod view;

pub use controller::{ControllerConfig, SortingController};
pub use scheduler::{clock_now, SchedulerConfig, SessionScheduler};
pub use share::{strip_query_param, ShareLink};
pub use view::{QuadrantView, RankedSkill, SessionView, SummaryView};
