//! Generation gateway implementations for Vitrine.
//!
//! This crate provides the Google Gemini implementation of the gateway traits
//! defined in `vitrine_interface`: competitive intelligence and campaign
//! drafts over the structured-text API, plus image, video (long-running job
//! with bounded polling), and speech generation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod gemini;

pub use config::{GatewayConfig, ImageConfig, ModelConfig, SpeechConfig, VideoConfig};
pub use extraction::{extract_json, parse_json};
pub use gemini::GeminiGateway;
