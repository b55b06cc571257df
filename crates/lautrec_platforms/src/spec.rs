//! Per-platform constraint specification.

use derive_getters::Getters;
use lautrec_core::AspectRatio;
use lautrec_error::{PlatformError, PlatformErrorKind};
use serde::{Deserialize, Serialize};

/// Caption register expected by a destination platform.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CaptionStyle {
    /// Punchy, emoji-friendly caption
    ShortEmoji,
    /// Longer, businesslike caption
    ProfessionalDetailed,
    /// Tight single-line caption with inline tags
    ConciseInline,
    /// Little or no caption text
    Minimal,
}

impl CaptionStyle {
    /// Phrase describing this register to the copywriting collaborator.
    pub fn prompt_hint(&self) -> &'static str {
        match self {
            CaptionStyle::ShortEmoji => "short and punchy, emoji welcome",
            CaptionStyle::ProfessionalDetailed => {
                "detailed and businesslike, full sentences, no emoji"
            }
            CaptionStyle::ConciseInline => "one or two tight sentences, tags woven inline",
            CaptionStyle::Minimal => "a single short line, or none at all",
        }
    }
}

/// Immutable constraints for one destination platform.
///
/// `max_characters` of `None` marks a platform with no text limit
/// (image-first placements such as hero banners). Specs are loaded once by
/// the registry and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Ceiling on the full published string; `None` = no limit.
    #[serde(default)]
    max_characters: Option<u32>,

    /// Ceiling on the number of hashtags. Zero disables hashtags.
    max_hashtags: u32,

    /// Ceiling on the length of one hashtag token, without the `#`.
    max_hashtag_length: u32,

    /// Target image width in pixels.
    image_width: u32,

    /// Target image height in pixels.
    image_height: u32,

    /// Caption register for generated copy.
    caption_style: CaptionStyle,
}

impl PlatformSpec {
    /// Whether this platform has no text limit.
    pub fn unlimited_text(&self) -> bool {
        self.max_characters.is_none()
    }

    /// The collaborator aspect ratio closest to this platform's dimensions.
    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio::from_dimensions(self.image_width, self.image_height)
    }

    /// Check the spec's numeric invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpec` when a dimension or hashtag length is zero,
    /// or when a character limit of zero was written instead of omitting
    /// the field.
    pub fn ensure_valid(&self, platform: &str) -> Result<(), PlatformError> {
        let complaint = if self.max_characters == Some(0) {
            Some("max_characters must be positive; omit the field for no limit")
        } else if self.max_hashtag_length == 0 {
            Some("max_hashtag_length must be positive")
        } else if self.image_width == 0 || self.image_height == 0 {
            Some("image dimensions must be positive")
        } else {
            None
        };

        match complaint {
            Some(message) => Err(PlatformError::new(PlatformErrorKind::InvalidSpec {
                platform: platform.to_string(),
                message: message.to_string(),
            })),
            None => Ok(()),
        }
    }
}
