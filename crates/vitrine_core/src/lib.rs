//! Core domain types for the Vitrine content-planning library.
//!
//! This crate provides the shared vocabulary used across all Vitrine crates:
//! posts, competitive-intelligence records, and their enumerations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod intelligence;
mod media;
mod network;
mod post;
mod status;
mod telemetry;
mod visual;

pub use intelligence::{IntelligenceCategory, IntelligenceRecord, SourceRef};
pub use media::MediaRef;
pub use network::SocialNetwork;
pub use post::{Post, PostDraft};
pub use status::PostStatus;
pub use telemetry::init_telemetry;
pub use visual::VisualType;
