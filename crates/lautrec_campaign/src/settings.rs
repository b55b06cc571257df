//! Generation settings loaded from configuration.

use config::{Config, File, FileFormat};
use lautrec_error::{ConfigError, LautrecError, LautrecResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../lautrec.toml");

/// The `[generation]` section of a lautrec.toml file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct SettingsFile {
    generation: GenerationSettings,
}

/// Tunables for the campaign pipeline.
///
/// Loaded once at startup with the same precedence chain as the platform
/// registry: bundled defaults, then the home config, then `./lautrec.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Concurrent per-platform pipelines; bounds pressure on the external APIs
    pub max_concurrent: usize,
    /// Default copywriting model
    pub text_model: String,
    /// Default image model
    pub image_model: String,
    /// Deadline for one copywriting call, in seconds
    pub text_timeout_secs: u64,
    /// Deadline for one image call, in seconds
    pub image_timeout_secs: u64,
    /// Retry cap for transient external failures
    pub max_retries: usize,
    /// Requests per minute against each external API, `None` for unlimited
    #[serde(default)]
    pub requests_per_minute: Option<u32>,
    /// Directory image payloads are offloaded to
    pub output_dir: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_concurrent: 4,
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            text_timeout_secs: 8,
            image_timeout_secs: 15,
            max_retries: 2,
            requests_per_minute: Some(30),
            output_dir: "output".to_string(),
        }
    }
}

impl GenerationSettings {
    /// Load settings with precedence: user override > bundled default.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source fails to parse.
    #[instrument]
    pub fn load() -> LautrecResult<Self> {
        debug!("Loading generation settings: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lautrec/lautrec.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("lautrec").required(false));

        let file: SettingsFile = builder
            .build()
            .map_err(|e| {
                LautrecError::from(ConfigError::new(format!(
                    "Failed to build generation settings: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LautrecError::from(ConfigError::new(format!(
                    "Failed to parse generation settings: {}",
                    e
                )))
            })?;

        Ok(file.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let file: SettingsFile = config::Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(file.generation.max_concurrent, 4);
        assert_eq!(file.generation.max_retries, 2);
        assert!(file.generation.text_timeout_secs < 10);
    }
}
