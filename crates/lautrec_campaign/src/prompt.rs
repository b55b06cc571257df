//! Prompt construction for the generation collaborators.

use lautrec_core::{CampaignBrief, HashtagStrategy, ImageStyle};
use lautrec_platforms::PlatformSpec;

/// Phrase describing the hashtag strategy to the copywriter.
fn hashtag_hint(strategy: &HashtagStrategy) -> &'static str {
    match strategy {
        HashtagStrategy::IndustrySpecific => {
            "tags drawn from the campaign's industry vocabulary"
        }
        HashtagStrategy::Trending => "tags currently popular with this platform's audience",
        HashtagStrategy::Branded => "tags built around the brand or product name",
        HashtagStrategy::Niche => "narrow community tags with small, engaged audiences",
    }
}

/// Opening phrase describing the visual treatment to the image model.
fn image_style_phrase(style: Option<&ImageStyle>) -> &'static str {
    match style {
        Some(ImageStyle::Photorealistic) => {
            "Photorealistic professional photography of"
        }
        Some(ImageStyle::Illustrated) => "Flat, modern illustration of",
        Some(ImageStyle::ThreeD) => "Polished 3D render of",
        Some(ImageStyle::Modern) => "Clean, modern graphic treatment of",
        None => "Professional marketing photograph of",
    }
}

/// Build the copywriting prompt for one platform.
///
/// The prompt embeds the brief, the platform's ceilings, the caption
/// register, and the requested style, strategy, and audience, and
/// instructs the collaborator to answer with a single JSON object.
pub fn copy_prompt(brief: &CampaignBrief, platform: &str, spec: &PlatformSpec) -> String {
    let mut prompt = format!(
        "Write a {} social media post for {} about: {}\n\n",
        brief.style(),
        platform,
        brief.brief()
    );

    if let Some(audience) = brief.target_audience() {
        prompt.push_str(&format!("Target audience: {}\n", audience));
    }

    prompt.push_str(&format!(
        "Caption style: {}.\n",
        spec.caption_style().prompt_hint()
    ));
    prompt.push_str(&format!(
        "Hashtag strategy: {}.\n\n",
        hashtag_hint(brief.hashtag_strategy())
    ));

    prompt.push_str("Constraints:\n");
    if let Some(limit) = spec.max_characters() {
        prompt.push_str(&format!(
            "- The complete post (text plus hashtags) must fit in {} characters.\n",
            limit
        ));
    }
    if *spec.max_hashtags() == 0 {
        prompt.push_str("- Do not include any hashtags.\n");
    } else {
        prompt.push_str(&format!(
            "- Use at most {} hashtags, each at most {} characters, listed without the leading '#'.\n",
            spec.max_hashtags(),
            spec.max_hashtag_length()
        ));
    }
    if *brief.include_cta() {
        prompt.push_str(
            "- End the post with a short call to action, and echo it in the cta field.\n",
        );
    } else {
        prompt.push_str("- Do not include a call to action; leave the cta field empty.\n");
    }

    prompt.push_str(
        "\nRespond with ONLY a JSON object of the form \
         {\"content\": \"...\", \"hashtags\": [\"...\"], \"cta\": \"...\"}.\n",
    );

    prompt
}

/// Build the image prompt for one platform.
pub fn image_prompt(brief: &CampaignBrief, platform: &str, spec: &PlatformSpec) -> String {
    format!(
        "{} {}. Composed for a {}x{} {} placement. \
         High detail, commercial quality, vibrant but believable colors, no text overlay.",
        image_style_phrase(brief.image_style().as_ref()),
        brief.brief(),
        spec.image_width(),
        spec.image_height(),
        platform
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lautrec_core::{CampaignBriefBuilder, ContentStyle};
    use lautrec_platforms::PlatformRegistry;

    fn brief() -> CampaignBrief {
        CampaignBriefBuilder::default()
            .brief("Launch of our AI-powered espresso machine")
            .platforms(vec!["twitter_post".to_string()])
            .style(ContentStyle::Promotional)
            .target_audience("busy remote workers")
            .build()
            .unwrap()
    }

    #[test]
    fn copy_prompt_embeds_platform_ceilings() -> anyhow::Result<()> {
        let registry = PlatformRegistry::builtin()?;
        let spec = registry.get("twitter_post")?;
        let prompt = copy_prompt(&brief(), "twitter_post", spec);

        assert!(prompt.contains("280 characters"));
        assert!(prompt.contains("at most 2 hashtags"));
        assert!(prompt.contains("busy remote workers"));
        assert!(prompt.contains("promotional"));
        assert!(prompt.contains("ONLY a JSON object"));
        Ok(())
    }

    #[test]
    fn unlimited_platforms_omit_the_character_constraint() -> anyhow::Result<()> {
        let registry = PlatformRegistry::builtin()?;
        let spec = registry.get("website_hero")?;
        let prompt = copy_prompt(&brief(), "website_hero", spec);

        assert!(!prompt.contains("must fit in"));
        assert!(prompt.contains("Do not include any hashtags"));
        Ok(())
    }

    #[test]
    fn image_prompt_carries_dimensions_and_style() -> anyhow::Result<()> {
        let registry = PlatformRegistry::builtin()?;
        let spec = registry.get("instagram_story")?;
        let prompt = image_prompt(&brief(), "instagram_story", spec);

        assert!(prompt.contains("1080x1920"));
        assert!(prompt.contains("instagram_story"));
        // no image style requested -> default treatment
        assert!(prompt.starts_with("Professional marketing photograph"));
        Ok(())
    }
}
