//! Post lifecycle engine and generation orchestrator for Vitrine.
//!
//! This crate is the core of the planning dashboard:
//! - [`PostBoard`] owns the post collection, its status transitions, and the
//!   filtered/grouped views behind the calendar.
//! - [`SessionState`] is the explicit session-state object owned by the
//!   hosting process; every mutation funnels through it and is mirrored to
//!   the persistence adapter.
//! - [`CampaignStudio`] orchestrates the asynchronous generation requests:
//!   bulk brief-to-calendar drafting and per-post visual generation with
//!   per-post in-flight tracking.
//! - [`playback`] decodes raw speech payloads for the shell's audio facility.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod board;
pub mod playback;
mod session;
mod studio;

pub use board::{group_by_day, matches_day, DayBucket, PostBoard};
pub use session::{DashboardSummary, SessionState, DEFAULT_SELECTED_DAYS, WEEK_DAYS};
pub use studio::{CampaignStudio, GenerationTracker};
