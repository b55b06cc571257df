//! Campaign brief and generation style types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Voice of the generated copy.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContentStyle {
    /// Polished business voice
    #[default]
    Professional,
    /// Relaxed conversational voice
    Casual,
    /// Playful, joke-forward voice
    Humorous,
    /// Explainer voice that teaches something
    Educational,
    /// Direct offer-and-benefit voice
    Promotional,
}

/// How hashtags are selected for the generated copy.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum HashtagStrategy {
    /// Tags drawn from the campaign's industry vocabulary
    #[default]
    IndustrySpecific,
    /// Tags currently popular on the destination platform
    Trending,
    /// Tags built around the brand or product name
    Branded,
    /// Narrow community tags with small, engaged audiences
    Niche,
}

/// Visual treatment requested for generated images.
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
pub enum ImageStyle {
    /// Photography-grade realism
    Photorealistic,
    /// Flat or painterly illustration
    Illustrated,
    /// Rendered 3D scene
    #[serde(rename = "3d")]
    #[strum(serialize = "3d")]
    ThreeD,
    /// Clean contemporary graphic design
    Modern,
}

/// The single input driving all per-platform generation.
///
/// A brief is immutable once built and consumed by exactly one pipeline
/// invocation. The platform list preserves caller order and may contain
/// identifiers the registry does not know; those slots surface as
/// unknown-platform results rather than being dropped.
///
/// # Examples
///
/// ```
/// use lautrec_core::{CampaignBriefBuilder, ContentStyle};
///
/// let brief = CampaignBriefBuilder::default()
///     .brief("Launch of our new AI-powered espresso machine")
///     .platforms(vec!["instagram_feed".to_string(), "twitter_post".to_string()])
///     .style(ContentStyle::Promotional)
///     .build()
///     .unwrap();
///
/// assert_eq!(brief.platforms().len(), 2);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct CampaignBrief {
    /// Free-text description of what to promote.
    #[builder(setter(into))]
    brief: String,

    /// Ordered destination platform identifiers.
    platforms: Vec<String>,

    /// Voice of the generated copy.
    #[builder(default)]
    #[serde(default)]
    style: ContentStyle,

    /// Hashtag selection strategy.
    #[builder(default)]
    #[serde(default)]
    hashtag_strategy: HashtagStrategy,

    /// Audience the copy should address.
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    target_audience: Option<String>,

    /// Visual treatment for generated images.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    image_style: Option<ImageStyle>,

    /// Whether generated copy should carry a call to action.
    #[builder(default = "true")]
    #[serde(default = "default_include_cta")]
    include_cta: bool,
}

fn default_include_cta() -> bool {
    true
}

impl CampaignBriefBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(brief) = &self.brief
            && brief.trim().is_empty()
        {
            return Err("campaign brief must not be empty".to_string());
        }
        if let Some(platforms) = &self.platforms
            && platforms.is_empty()
        {
            return Err("at least one platform must be requested".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_empty_brief() {
        let result = CampaignBriefBuilder::default()
            .brief("   ")
            .platforms(vec!["twitter_post".to_string()])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_empty_platform_list() {
        let result = CampaignBriefBuilder::default()
            .brief("Promote the thing")
            .platforms(vec![])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_defaults() {
        let brief = CampaignBriefBuilder::default()
            .brief("Promote the thing")
            .platforms(vec!["twitter_post".to_string()])
            .build()
            .unwrap();
        assert_eq!(*brief.style(), ContentStyle::Professional);
        assert_eq!(*brief.hashtag_strategy(), HashtagStrategy::IndustrySpecific);
        assert!(*brief.include_cta());
        assert!(brief.image_style().is_none());
    }

    #[test]
    fn style_serialization_is_kebab_case() {
        let json = serde_json::to_string(&ContentStyle::Promotional).unwrap();
        assert_eq!(json, "\"promotional\"");
        let style: ImageStyle = serde_json::from_str("\"3d\"").unwrap();
        assert_eq!(style, ImageStyle::ThreeD);
    }

    #[test]
    fn style_parses_from_str() {
        let style: ContentStyle = "educational".parse().unwrap();
        assert_eq!(style, ContentStyle::Educational);
        let strategy: HashtagStrategy = "industry-specific".parse().unwrap();
        assert_eq!(strategy, HashtagStrategy::IndustrySpecific);
    }
}
