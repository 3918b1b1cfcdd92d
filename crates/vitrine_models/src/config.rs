//! Gateway configuration.
//!
//! This module provides TOML-based configuration for the generation gateway.
//! The configuration system supports:
//! - Bundled defaults (include_str! from vitrine.toml)
//! - User overrides (./vitrine.toml or ~/.config/vitrine/vitrine.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use vitrine_error::{ConfigError, VitrineError, VitrineResult};

/// Model identifiers, one per gateway operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Model for the competitive watch (search-grounded JSON)
    pub intelligence: String,
    /// Model for campaign drafting (structured JSON)
    pub drafts: String,
    /// Model for image generation
    pub image: String,
    /// Model for video generation (long-running job)
    pub video: String,
    /// Model for text-to-speech
    pub speech: String,
}

/// Image generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Requested aspect ratio (e.g., "1:1")
    pub aspect_ratio: String,
}

/// Video generation parameters.
///
/// The polling loop re-checks job completion every `poll_interval_secs` and
/// gives up with a timed-out error once `poll_timeout_secs` of wall clock
/// have elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoConfig {
    /// Seconds between completion checks
    pub poll_interval_secs: u64,
    /// Wall-clock deadline for the whole job
    pub poll_timeout_secs: u64,
    /// Requested resolution (e.g., "720p")
    pub resolution: String,
    /// Requested aspect ratio (e.g., "9:16")
    pub aspect_ratio: String,
}

/// Speech generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeechConfig {
    /// Prebuilt voice name
    pub voice: String,
}

/// Top-level gateway configuration.
///
/// # Example
///
/// ```no_run
/// use vitrine_models::GatewayConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GatewayConfig::load()?;
/// println!("Draft model: {}", config.models.drafts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Model identifiers
    pub models: ModelConfig,
    /// Image parameters
    pub image: ImageConfig,
    /// Video parameters
    pub video: VideoConfig,
    /// Speech parameters
    pub speech: SpeechConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::bundled().expect("bundled vitrine.toml must parse")
    }
}

impl GatewayConfig {
    /// Parse only the bundled defaults.
    fn bundled() -> VitrineResult<Self> {
        const DEFAULT_CONFIG: &str = include_str!("../vitrine.toml");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VitrineResult<Self> {
        debug!("Loading gateway configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override
    /// earlier):
    /// 1. Bundled defaults (vitrine.toml shipped with the library)
    /// 2. User config in home directory (~/.config/vitrine/vitrine.toml)
    /// 3. User config in current directory (./vitrine.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> VitrineResult<Self> {
        debug!("Loading gateway configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../vitrine.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vitrine/vitrine.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("vitrine").required(false));

        builder
            .build()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = GatewayConfig::default();
        assert_eq!(config.video.poll_interval_secs, 10);
        assert!(config.video.poll_timeout_secs > config.video.poll_interval_secs);
        assert_eq!(config.speech.voice, "Kore");
        assert!(!config.models.drafts.is_empty());
    }
}
