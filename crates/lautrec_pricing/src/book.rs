//! The price book: USD rates for every billable resource.

use config::{Config, File, FileFormat};
use lautrec_core::ImageSize;
use lautrec_error::{ConfigError, LautrecError, LautrecResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../lautrec.toml");

/// Image generation model families, priced per image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ImageModel {
    /// Imagen 3.0 family
    #[default]
    #[serde(rename = "imagen-3.0")]
    #[strum(serialize = "imagen-3.0")]
    Imagen3,
    /// Imagen 4.0 family (standard, ultra, fast)
    #[serde(rename = "imagen-4.0")]
    #[strum(serialize = "imagen-4.0")]
    Imagen4,
}

impl ImageModel {
    /// Classify a free-form model identifier into a price family.
    ///
    /// Any identifier mentioning a 4.x generation bills as Imagen 4;
    /// everything else bills as Imagen 3.
    pub fn classify(name: &str) -> Self {
        if name.contains('4') {
            ImageModel::Imagen4
        } else {
            ImageModel::Imagen3
        }
    }
}

/// Video generation models, priced per second.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum VideoModel {
    /// Veo 2
    #[serde(rename = "veo2")]
    #[strum(serialize = "veo2")]
    Veo2,
    /// Veo 3 Standard
    #[default]
    #[serde(rename = "veo3")]
    #[strum(serialize = "veo3")]
    Veo3,
    /// Veo 3 Fast
    #[serde(rename = "veo3_fast")]
    #[strum(serialize = "veo3_fast")]
    Veo3Fast,
}

impl VideoModel {
    /// Classify a free-form model identifier into a price entry.
    ///
    /// Unrecognized identifiers bill at the Veo 3 standard rate.
    pub fn classify(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if name.contains("veo2") || name.contains("veo-2") {
            VideoModel::Veo2
        } else if name.contains("fast") {
            VideoModel::Veo3Fast
        } else {
            VideoModel::Veo3
        }
    }
}

/// Text generation models, priced per 1K tokens.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum TextModel {
    /// Gemini Flash family
    #[default]
    #[serde(rename = "gemini-flash")]
    #[strum(serialize = "gemini-flash")]
    GeminiFlash,
    /// Claude Sonnet family
    #[serde(rename = "claude-sonnet")]
    #[strum(serialize = "claude-sonnet")]
    ClaudeSonnet,
}

/// The `[pricing]` section of a lautrec.toml file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct PricingFile {
    pricing: PriceBook,
}

/// Versioned table of USD rates.
///
/// Values mirror the published Gemini API pricing. The book is immutable
/// after load; price changes ship as configuration, not code.
///
/// # Examples
///
/// ```
/// use lautrec_pricing::{ImageModel, PriceBook};
/// use lautrec_core::ImageSize;
///
/// let book = PriceBook::default();
/// assert_eq!(book.image_price(ImageModel::Imagen4, ImageSize::TwoK), 0.08);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBook {
    /// Date of the upstream pricing sheet this table mirrors
    version: String,
    imagen3_1k: f64,
    imagen3_2k: f64,
    imagen4_1k: f64,
    imagen4_2k: f64,
    veo2_per_second: f64,
    veo3_per_second: f64,
    veo3_fast_per_second: f64,
    claude_sonnet_per_1k_tokens: f64,
    gemini_flash_per_1k_tokens: f64,
    /// Assumed token volume of one content piece for estimation
    avg_tokens_per_piece: u32,
}

impl Default for PriceBook {
    fn default() -> Self {
        Self {
            version: "2025-11-09".to_string(),
            imagen3_1k: 0.02,
            imagen3_2k: 0.04,
            imagen4_1k: 0.04,
            imagen4_2k: 0.08,
            veo2_per_second: 0.40,
            veo3_per_second: 0.75,
            veo3_fast_per_second: 0.40,
            claude_sonnet_per_1k_tokens: 0.003,
            gemini_flash_per_1k_tokens: 0.0005,
            avg_tokens_per_piece: 500,
        }
    }
}

impl PriceBook {
    /// Load the price book with precedence: user override > bundled default.
    ///
    /// Same precedence chain as the platform registry: bundled defaults,
    /// then `~/.config/lautrec/lautrec.toml`, then `./lautrec.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source fails to parse.
    #[instrument]
    pub fn load() -> LautrecResult<Self> {
        debug!("Loading price book: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lautrec/lautrec.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("lautrec").required(false));

        let file: PricingFile = builder
            .build()
            .map_err(|e| {
                LautrecError::from(ConfigError::new(format!(
                    "Failed to build pricing configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LautrecError::from(ConfigError::new(format!(
                    "Failed to parse pricing configuration: {}",
                    e
                )))
            })?;

        Ok(file.pricing)
    }

    /// Date of the upstream pricing sheet this table mirrors.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// USD price of one generated image.
    pub fn image_price(&self, model: ImageModel, size: ImageSize) -> f64 {
        match (model, size) {
            (ImageModel::Imagen3, ImageSize::OneK) => self.imagen3_1k,
            (ImageModel::Imagen3, ImageSize::TwoK) => self.imagen3_2k,
            (ImageModel::Imagen4, ImageSize::OneK) => self.imagen4_1k,
            (ImageModel::Imagen4, ImageSize::TwoK) => self.imagen4_2k,
        }
    }

    /// USD price of one second of generated video.
    pub fn video_price_per_second(&self, model: VideoModel) -> f64 {
        match model {
            VideoModel::Veo2 => self.veo2_per_second,
            VideoModel::Veo3 => self.veo3_per_second,
            VideoModel::Veo3Fast => self.veo3_fast_per_second,
        }
    }

    /// USD price of 1K generated text tokens.
    pub fn text_price_per_1k_tokens(&self, model: TextModel) -> f64 {
        match model {
            TextModel::GeminiFlash => self.gemini_flash_per_1k_tokens,
            TextModel::ClaudeSonnet => self.claude_sonnet_per_1k_tokens,
        }
    }

    /// Assumed token volume of one content piece for estimation.
    pub fn avg_tokens_per_piece(&self) -> u32 {
        self.avg_tokens_per_piece
    }
}
