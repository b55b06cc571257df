//! Artifact types produced by the per-platform pipeline.

use serde::{Deserialize, Serialize};

/// Validated copy for one destination platform.
///
/// Derived entirely from the collaborator response plus the platform spec;
/// never mutated after creation. `character_count` covers the full
/// published string (content, separator, `#`-prefixed hashtags) so the
/// validator and the serialized output can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPiece {
    /// Destination platform identifier
    pub platform: String,
    /// Post body text
    pub content: String,
    /// Ordered, deduplicated hashtag tokens without the leading `#`
    pub hashtags: Vec<String>,
    /// Hashtags exactly as they would be published, e.g. `"#rust #ai"`
    pub hashtag_string: String,
    /// Call to action echoed by the collaborator, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    /// Length in characters of the full published string
    pub character_count: usize,
    /// Platform character ceiling (`None` = no limit)
    pub character_limit: Option<u32>,
    /// Whether the published string fits the character ceiling
    pub within_character_limit: bool,
    /// Number of distinct hashtag tokens
    pub hashtag_count: usize,
    /// Platform hashtag ceiling
    pub hashtag_limit: u32,
    /// Whether the hashtags fit the count and per-tag length ceilings
    pub within_hashtag_limit: bool,
    /// Conjunction of both limit checks
    pub all_valid: bool,
    /// Cost attributed to generating this piece, in USD
    pub estimated_cost_usd: f64,
}

impl ContentPiece {
    /// The full post string exactly as it would be published.
    pub fn published_text(&self) -> String {
        if self.hashtag_string.is_empty() {
            self.content.clone()
        } else {
            format!("{} {}", self.content, self.hashtag_string)
        }
    }
}

/// A generated (or failed) image for one destination platform.
///
/// Safety rejections and transport failures both degrade to
/// `success = false` with a `failure_reason`; neither aborts the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageArtifact {
    /// Destination platform identifier
    pub platform: String,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// MIME type of the payload, when one was produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// Base64-encoded image payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_data: Option<String>,
    /// Filesystem path, when the payload was offloaded to the output directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Cost attributed to generating this image, in USD
    pub cost_usd: f64,
    /// Whether a usable image was produced
    pub success: bool,
    /// Why generation failed, e.g. "safety filter triggered"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl ImageArtifact {
    /// A successfully generated image carrying its payload and cost.
    pub fn produced(
        platform: impl Into<String>,
        width: u32,
        height: u32,
        mime: Option<String>,
        base64_data: String,
        cost_usd: f64,
    ) -> Self {
        Self {
            platform: platform.into(),
            width,
            height,
            mime,
            base64_data: Some(base64_data),
            path: None,
            cost_usd,
            success: true,
            failure_reason: None,
        }
    }

    /// A failed generation attempt. Failed images are never billed.
    pub fn failed(
        platform: impl Into<String>,
        width: u32,
        height: u32,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            width,
            height,
            mime: None,
            base64_data: None,
            path: None,
            cost_usd: 0.0,
            success: false,
            failure_reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_text_matches_character_count_shape() {
        let piece = ContentPiece {
            platform: "twitter_post".to_string(),
            content: "Big news today".to_string(),
            hashtags: vec!["rust".to_string(), "ai".to_string()],
            hashtag_string: "#rust #ai".to_string(),
            call_to_action: None,
            character_count: "Big news today #rust #ai".chars().count(),
            character_limit: Some(280),
            within_character_limit: true,
            hashtag_count: 2,
            hashtag_limit: 2,
            within_hashtag_limit: true,
            all_valid: true,
            estimated_cost_usd: 0.0004,
        };
        assert_eq!(piece.published_text(), "Big news today #rust #ai");
        assert_eq!(piece.published_text().chars().count(), piece.character_count);
    }

    #[test]
    fn failed_artifact_is_unbilled() {
        let artifact = ImageArtifact::failed("tiktok", 1080, 1920, "safety filter triggered");
        assert!(!artifact.success);
        assert_eq!(artifact.cost_usd, 0.0);
        assert!(artifact.base64_data.is_none());
        assert_eq!(
            artifact.failure_reason.as_deref(),
            Some("safety filter triggered")
        );
    }
}
