// Copy generation tests: structuring, validation, and cost attribution.

mod test_utils;

use lautrec_campaign::CopyGenerator;
use lautrec_core::CampaignBriefBuilder;
use lautrec_platforms::PlatformRegistry;
use lautrec_pricing::{CostEstimator, PriceBook};
use std::sync::Arc;
use test_utils::MockCopyDriver;

fn generator(driver: MockCopyDriver) -> CopyGenerator {
    CopyGenerator::new(
        Arc::new(driver),
        Arc::new(CostEstimator::new(PriceBook::default())),
    )
}

#[tokio::test]
async fn markdown_fenced_reply_is_structured() -> anyhow::Result<()> {
    let reply = "Here you go!\n```json\n{\"content\": \"Morning brew, upgraded.\", \
                 \"hashtags\": [\"#coffee\", \"coffee\", \"ai\"], \"cta\": \"Order now\"}\n```";
    let generator = generator(MockCopyDriver::new_success(reply));

    let registry = PlatformRegistry::builtin()?;
    let spec = registry.get("instagram_feed")?;
    let brief = CampaignBriefBuilder::default()
        .brief("Espresso machine launch")
        .platforms(vec!["instagram_feed".to_string()])
        .build()?;

    let piece = generator.generate(&brief, "instagram_feed", spec).await?;

    assert_eq!(piece.content, "Morning brew, upgraded.");
    // "#coffee" and "coffee" collapse into one token
    assert_eq!(piece.hashtags, vec!["coffee", "ai"]);
    assert_eq!(piece.hashtag_string, "#coffee #ai");
    assert_eq!(piece.call_to_action.as_deref(), Some("Order now"));
    assert!(piece.all_valid);
    // 500 reported tokens of Gemini Flash
    assert_eq!(piece.estimated_cost_usd, 0.00025);
    Ok(())
}

#[tokio::test]
async fn cta_is_dropped_when_not_requested() -> anyhow::Result<()> {
    let reply = r#"{"content": "Quiet launch.", "hashtags": [], "cta": "Buy now"}"#;
    let generator = generator(MockCopyDriver::new_success(reply));

    let registry = PlatformRegistry::builtin()?;
    let spec = registry.get("twitter_post")?;
    let brief = CampaignBriefBuilder::default()
        .brief("Espresso machine launch")
        .platforms(vec!["twitter_post".to_string()])
        .include_cta(false)
        .build()?;

    let piece = generator.generate(&brief, "twitter_post", spec).await?;
    assert!(piece.call_to_action.is_none());
    Ok(())
}

#[tokio::test]
async fn plain_text_reply_is_rejected() -> anyhow::Result<()> {
    let generator = generator(MockCopyDriver::new_success(
        "I'm sorry, I can't produce JSON right now.",
    ));

    let registry = PlatformRegistry::builtin()?;
    let spec = registry.get("twitter_post")?;
    let brief = CampaignBriefBuilder::default()
        .brief("Espresso machine launch")
        .platforms(vec!["twitter_post".to_string()])
        .build()?;

    let result = generator.generate(&brief, "twitter_post", spec).await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn hashtag_overflow_is_reported_not_trimmed() -> anyhow::Result<()> {
    let reply = r#"{"content": "Tag storm.", "hashtags": ["a", "b", "c", "d"]}"#;
    let generator = generator(MockCopyDriver::new_success(reply));

    let registry = PlatformRegistry::builtin()?;
    // twitter_post allows 2 hashtags
    let spec = registry.get("twitter_post")?;
    let brief = CampaignBriefBuilder::default()
        .brief("Espresso machine launch")
        .platforms(vec!["twitter_post".to_string()])
        .build()?;

    let piece = generator.generate(&brief, "twitter_post", spec).await?;
    assert_eq!(piece.hashtags.len(), 4);
    assert!(!piece.within_hashtag_limit);
    assert!(!piece.all_valid);
    assert!(piece.within_character_limit);
    Ok(())
}
