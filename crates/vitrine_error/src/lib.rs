//! Error types for the Vitrine library.
//!
//! This crate provides the foundation error types used throughout the Vitrine
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vitrine_error::{VitrineResult, HttpError};
//!
//! fn fetch_data() -> VitrineResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod gateway;
mod storage;
mod playback;
mod planner;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use gateway::{GatewayError, GatewayErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use playback::{PlaybackError, PlaybackErrorKind};
pub use planner::{PlannerError, PlannerErrorKind};
pub use error::{VitrineError, VitrineErrorKind, VitrineResult};
