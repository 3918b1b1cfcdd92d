//! Vitrine - AI-assisted social-media content planning engine
//!
//! Vitrine is the engine behind the BAGRI content-planning dashboard: it
//! requests competitive-intelligence summaries and drafts a week of
//! social-media posts (text, image, video, speech) through a generative-AI
//! gateway, then drives the review/approve/publish workflow over a calendar
//! board.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vitrine::{
//!     CampaignStudio, ContentGateway, FileSystemStore, GeminiGateway, SessionState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     vitrine::init_telemetry()?;
//!
//!     let store = Arc::new(FileSystemStore::new("./session")?);
//!     let mut session = SessionState::load(store).await?;
//!
//!     let gateway = Arc::new(GeminiGateway::new()?);
//!     if session.needs_intelligence() {
//!         let records = gateway.competitive_intelligence().await?;
//!         session.replace_intelligence(records).await?;
//!     }
//!
//!     let studio = CampaignStudio::new(gateway);
//!     let posts = studio
//!         .generate_campaign(
//!             &[vitrine::SocialNetwork::LinkedIn],
//!             session.selected_days().to_vec().as_slice(),
//!             session.intelligence(),
//!             Some("Campagne de récolte".to_string()),
//!         )
//!         .await?;
//!     session.add_posts(posts).await?;
//!
//!     for column in session.day_columns() {
//!         println!("{} : {} post(s)", column.day, column.posts.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vitrine is organized as a workspace with focused crates:
//!
//! - `vitrine_core` - Domain types (Post, IntelligenceRecord, enums)
//! - `vitrine_error` - Error types
//! - `vitrine_interface` - Gateway trait definitions
//! - `vitrine_models` - Gemini gateway implementation
//! - `vitrine_planner` - Post board, session state, generation orchestrator
//! - `vitrine_storage` - Named-slot session persistence
//!
//! This crate (`vitrine`) re-exports everything for convenience.

#![forbid(unsafe_code)]

// Re-export the workspace crates
pub use vitrine_core::*;
pub use vitrine_error::*;
pub use vitrine_interface::*;
pub use vitrine_models::*;
pub use vitrine_planner::*;
pub use vitrine_storage::*;
