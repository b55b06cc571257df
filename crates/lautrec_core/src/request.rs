//! Request and response types for the external generation collaborators.

use serde::{Deserialize, Serialize};

/// Request to the copywriting collaborator.
///
/// # Examples
///
/// ```
/// use lautrec_core::CopyRequest;
///
/// let request = CopyRequest {
///     prompt: "Write a post about espresso".to_string(),
///     max_tokens: Some(1024),
///     temperature: Some(0.7),
///     model: None,
/// };
///
/// assert_eq!(request.max_tokens, Some(1024));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CopyRequest {
    /// The full prompt to send
    pub prompt: String,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier override; the driver's default when `None`
    pub model: Option<String>,
}

/// Response from the copywriting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyResponse {
    /// Raw generated text
    pub text: String,
    /// Token count reported by the collaborator, when available
    pub tokens_used: Option<u32>,
}

impl CopyResponse {
    /// Token count for billing: reported usage when available, otherwise a
    /// conservative chars/4 estimate of the generated text.
    pub fn billable_tokens(&self) -> u64 {
        match self.tokens_used {
            Some(tokens) => tokens as u64,
            None => (self.text.len() / 4).max(1) as u64,
        }
    }
}

/// Aspect ratios supported by the image collaborator.
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
    strum::EnumIter,
)]
pub enum AspectRatio {
    /// 1:1
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// 3:4
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    Portrait,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Landscape,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Vertical,
    /// 16:9
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Widescreen,
}

impl AspectRatio {
    /// The supported ratio closest to the given pixel dimensions.
    ///
    /// Platform specs carry exact pixel targets; the collaborator only
    /// accepts a fixed ratio set, so we pick the nearest.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        let ratio = width as f64 / height.max(1) as f64;
        let candidates = [
            (1.0, AspectRatio::Square),
            (3.0 / 4.0, AspectRatio::Portrait),
            (4.0 / 3.0, AspectRatio::Landscape),
            (9.0 / 16.0, AspectRatio::Vertical),
            (16.0 / 9.0, AspectRatio::Widescreen),
        ];
        let mut best = AspectRatio::Square;
        let mut best_distance = f64::MAX;
        for (value, candidate) in candidates {
            let distance = (ratio - value).abs();
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        best
    }

    /// Wire representation, e.g. `"16:9"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Widescreen => "16:9",
        }
    }
}

/// Resolution tier for generated images.
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
pub enum ImageSize {
    /// 1K resolution
    #[default]
    #[serde(rename = "1K")]
    #[strum(serialize = "1K")]
    OneK,
    /// 2K resolution
    #[serde(rename = "2K")]
    #[strum(serialize = "2K")]
    TwoK,
}

impl ImageSize {
    /// Wire representation, `"1K"` or `"2K"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
        }
    }
}

/// Request to the image collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// The full image prompt
    pub prompt: String,
    /// Requested aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Requested resolution tier
    pub size: ImageSize,
    /// Elements to exclude from the image
    pub negative_prompt: Option<String>,
    /// Model identifier override; the driver's default when `None`
    pub model: Option<String>,
}

/// Response from the image collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Base64-encoded image payload
    pub base64_data: String,
    /// MIME type of the payload
    pub mime: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_picks_nearest() {
        assert_eq!(AspectRatio::from_dimensions(1080, 1080), AspectRatio::Square);
        assert_eq!(
            AspectRatio::from_dimensions(1080, 1920),
            AspectRatio::Vertical
        );
        assert_eq!(
            AspectRatio::from_dimensions(1600, 900),
            AspectRatio::Widescreen
        );
        assert_eq!(
            AspectRatio::from_dimensions(1000, 1500),
            AspectRatio::Portrait
        );
        // 1200x630 is 1.90, closer to 16:9 than 4:3
        assert_eq!(
            AspectRatio::from_dimensions(1200, 630),
            AspectRatio::Widescreen
        );
    }

    #[test]
    fn billable_tokens_prefers_reported_usage() {
        let with_usage = CopyResponse {
            text: "x".repeat(400),
            tokens_used: Some(37),
        };
        assert_eq!(with_usage.billable_tokens(), 37);

        let without_usage = CopyResponse {
            text: "x".repeat(400),
            tokens_used: None,
        };
        assert_eq!(without_usage.billable_tokens(), 100);
    }

    #[test]
    fn image_size_serializes_to_wire_form() {
        assert_eq!(serde_json::to_string(&ImageSize::TwoK).unwrap(), "\"2K\"");
        assert_eq!(ImageSize::default(), ImageSize::OneK);
    }
}
