//! Immutable platform registry loaded from configuration.
//!
//! The registry is process-wide immutable configuration: bundled defaults
//! shipped with the library (include_str! from lautrec.toml), merged under
//! optional user overrides (./lautrec.toml or
//! ~/.config/lautrec/lautrec.toml). It is loaded once at startup and
//! passed by reference into every component that needs it.

use crate::PlatformSpec;
use config::{Config, File, FileFormat};
use lautrec_error::{ConfigError, LautrecError, LautrecResult, PlatformError, PlatformErrorKind};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../lautrec.toml");

/// The `[platforms]` section of a lautrec.toml file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct RegistryFile {
    platforms: HashMap<String, PlatformSpec>,
}

/// Lookup table mapping platform identifiers to their constraints.
///
/// # Examples
///
/// ```
/// use lautrec_platforms::PlatformRegistry;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = PlatformRegistry::builtin()?;
/// let spec = registry.get("twitter_post")?;
/// assert_eq!(*spec.max_characters(), Some(280));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRegistry {
    platforms: HashMap<String, PlatformSpec>,
}

impl PlatformRegistry {
    /// Load the registry with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (lautrec.toml shipped with the library)
    /// 2. User config in home directory (~/.config/lautrec/lautrec.toml)
    /// 3. User config in current directory (./lautrec.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a config source fails to parse or a spec
    /// violates the registry invariants.
    #[instrument]
    pub fn load() -> LautrecResult<Self> {
        debug!("Loading platform registry: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lautrec/lautrec.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("lautrec").required(false));

        let config = builder.build().map_err(|e| {
            LautrecError::from(ConfigError::new(format!(
                "Failed to build platform configuration: {}",
                e
            )))
        })?;

        Self::from_config(config)
    }

    /// Load the registry from a specific file, without bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a spec
    /// violates the registry invariants.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LautrecResult<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                LautrecError::from(ConfigError::new(format!(
                    "Failed to read platform configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;
        Self::from_config(config)
    }

    /// Load only the bundled defaults, ignoring user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled table fails validation, which
    /// indicates a packaging defect.
    pub fn builtin() -> LautrecResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| {
                LautrecError::from(ConfigError::new(format!(
                    "Failed to parse bundled platform configuration: {}",
                    e
                )))
            })?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> LautrecResult<Self> {
        let file: RegistryFile = config.try_deserialize().map_err(|e| {
            LautrecError::from(ConfigError::new(format!(
                "Failed to parse platform configuration: {}",
                e
            )))
        })?;

        if file.platforms.is_empty() {
            return Err(PlatformError::new(PlatformErrorKind::EmptyRegistry).into());
        }

        for (platform, spec) in &file.platforms {
            spec.ensure_valid(platform)?;
        }

        debug!(platforms = file.platforms.len(), "Platform registry loaded");

        Ok(Self {
            platforms: file.platforms,
        })
    }

    /// Look up the spec for a platform identifier.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` when the identifier is not in the table. The
    /// lookup itself is O(1) and side-effect free.
    pub fn get(&self, platform: &str) -> Result<&PlatformSpec, PlatformError> {
        self.platforms
            .get(platform)
            .ok_or_else(|| PlatformError::unknown(platform))
    }

    /// Whether the registry knows this identifier.
    pub fn contains(&self, platform: &str) -> bool {
        self.platforms.contains_key(platform)
    }

    /// All known platform identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.platforms.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over all identifier/spec pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlatformSpec)> {
        self.platforms.iter().map(|(id, spec)| (id.as_str(), spec))
    }

    /// Number of known platforms.
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Whether the registry is empty. Load-time validation makes this
    /// impossible for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
