// Orchestrator tests: fan-out, ordering, partial-failure isolation, and
// cost aggregation over mock drivers.

mod test_utils;

use lautrec_campaign::{CampaignOrchestrator, CopyGenerator, ImageComposer};
use lautrec_core::{CampaignBrief, CampaignBriefBuilder, PlatformFailure};
use lautrec_error::{CopyErrorKind, ImageErrorKind};
use lautrec_platforms::PlatformRegistry;
use lautrec_pricing::{CostEstimator, PriceBook};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockCopyDriver, MockImageDriver, VALID_DRAFT};

fn orchestrator(copy: MockCopyDriver, image: MockImageDriver) -> CampaignOrchestrator {
    let registry = Arc::new(PlatformRegistry::builtin().unwrap());
    let estimator = Arc::new(CostEstimator::new(PriceBook::default()));
    CampaignOrchestrator::new(
        registry,
        CopyGenerator::new(Arc::new(copy), Arc::clone(&estimator)),
        ImageComposer::new(Arc::new(image), estimator),
        4,
    )
}

fn brief(platforms: &[&str]) -> CampaignBrief {
    CampaignBriefBuilder::default()
        .brief("Launch of our AI-powered espresso machine")
        .platforms(platforms.iter().map(|p| p.to_string()).collect::<Vec<_>>())
        .build()
        .unwrap()
}

#[tokio::test]
async fn batch_returns_results_in_request_order() {
    let copy = MockCopyDriver::new_success(VALID_DRAFT)
        // Slow down the first platform so completion order differs from
        // request order.
        .delay_for("instagram_feed", Duration::from_millis(80));
    let orchestrator = orchestrator(copy, MockImageDriver::new_success());

    let brief = brief(&["instagram_feed", "linkedin_post", "twitter_post"]);
    let result = orchestrator.run(&brief).await;

    assert_eq!(result.platforms_requested, 3);
    assert_eq!(result.results.len(), 3);
    assert_eq!(result.results[0].platform, "instagram_feed");
    assert_eq!(result.results[1].platform, "linkedin_post");
    assert_eq!(result.results[2].platform, "twitter_post");
    assert!(result.all_ready);
    assert_eq!(result.ready_count, 3);
}

#[tokio::test]
async fn unknown_platform_keeps_its_slot() {
    let copy = MockCopyDriver::new_success(VALID_DRAFT);
    let orchestrator = orchestrator(copy, MockImageDriver::new_success());

    let brief = brief(&["instagram_feed", "snapchat_story", "twitter_post"]);
    let result = orchestrator.run(&brief).await;

    assert_eq!(result.results.len(), 3);
    let slot = &result.results[1];
    assert_eq!(slot.platform, "snapchat_story");
    assert!(!slot.ready_for_posting);
    assert!(matches!(
        slot.error,
        Some(PlatformFailure::UnknownPlatform { .. })
    ));
    assert!(slot.content.is_none());

    // The neighbors are unaffected.
    assert!(result.results[0].ready_for_posting);
    assert!(result.results[2].ready_for_posting);
    assert_eq!(result.platforms_generated, 2);
    assert_eq!(result.ready_count, 2);
    assert!(!result.all_ready);
}

#[tokio::test]
async fn image_safety_failure_spares_the_copy() {
    let copy = MockCopyDriver::new_success(VALID_DRAFT);
    let image = MockImageDriver::new_success().fail_for(
        "tiktok",
        ImageErrorKind::SafetyRejected("person generation blocked".to_string()),
    );
    let orchestrator = orchestrator(copy, image);

    let brief = brief(&["instagram_feed", "tiktok", "twitter_post"]);
    let result = orchestrator.run(&brief).await;

    let slot = &result.results[1];
    assert_eq!(slot.platform, "tiktok");
    // Copy survived and validated; only readiness is lost.
    assert!(slot.error.is_none());
    let content = slot.content.as_ref().unwrap();
    assert!(content.all_valid);
    assert!(!slot.ready_for_posting);
    let artifact = slot.image.as_ref().unwrap();
    assert!(!artifact.success);
    assert!(
        artifact
            .failure_reason
            .as_deref()
            .unwrap()
            .starts_with("safety filter triggered")
    );

    assert!(result.results[0].ready_for_posting);
    assert!(result.results[2].ready_for_posting);
    assert!(!result.all_ready);
    // Failed image slot still counts as generated: copy exists.
    assert_eq!(result.platforms_generated, 3);
    assert_eq!(result.ready_count, 2);
}

#[tokio::test]
async fn copy_failure_is_isolated_to_its_platform() {
    let copy = MockCopyDriver::new_success(VALID_DRAFT).fail_for(
        "linkedin_post",
        CopyErrorKind::Http {
            status_code: 503,
            message: "model overloaded".to_string(),
        },
    );
    let orchestrator = orchestrator(copy, MockImageDriver::new_success());

    let brief = brief(&["instagram_feed", "linkedin_post", "twitter_post"]);
    let result = orchestrator.run(&brief).await;

    let slot = &result.results[1];
    assert!(matches!(
        slot.error,
        Some(PlatformFailure::ServiceFailed { .. })
    ));
    assert!(slot.content.is_none());
    assert!(slot.image.is_none());

    assert!(result.results[0].ready_for_posting);
    assert!(result.results[2].ready_for_posting);
    assert_eq!(result.platforms_generated, 2);
}

#[tokio::test]
async fn copy_timeout_maps_to_its_own_failure_kind() {
    let copy =
        MockCopyDriver::new_success(VALID_DRAFT).fail_for("twitter_post", CopyErrorKind::Timeout(8));
    let orchestrator = orchestrator(copy, MockImageDriver::new_success());

    let result = orchestrator.run(&brief(&["twitter_post"])).await;
    assert!(matches!(
        result.results[0].error,
        Some(PlatformFailure::CopyTimedOut { seconds: 8 })
    ));
}

#[tokio::test]
async fn content_only_path_never_calls_the_image_driver() {
    let copy = MockCopyDriver::new_success(VALID_DRAFT);
    let image = MockImageDriver::new_success();
    let image_calls = image.call_counter();
    let orchestrator = orchestrator(copy, image);

    let brief = brief(&["instagram_feed", "twitter_post"]);
    let result = orchestrator.run_content_only(&brief).await;

    assert_eq!(image_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert!(result.results.iter().all(|r| r.image.is_none()));
    assert!(result.all_ready);
}

#[tokio::test]
async fn costs_sum_only_over_produced_artifacts() {
    // One image fails safety filtering; it must not be billed.
    let copy = MockCopyDriver::new_success(VALID_DRAFT);
    let image = MockImageDriver::new_success().fail_for(
        "tiktok",
        ImageErrorKind::SafetyRejected("blocked".to_string()),
    );
    let orchestrator = orchestrator(copy, image);

    let brief = brief(&["instagram_feed", "tiktok", "twitter_post"]);
    let result = orchestrator.run(&brief).await;

    // 3 pieces x 500 tokens x $0.0005/1K + 2 images x $0.04 (imagen-4 1K)
    assert_eq!(result.estimated_cost_usd, 0.0808);
}

#[tokio::test]
async fn over_limit_copy_is_surfaced_not_truncated() {
    let long_content = "x".repeat(300);
    let oversized = format!(r#"{{"content": "{long_content}", "hashtags": ["launch"]}}"#);
    let copy = MockCopyDriver::new_success(VALID_DRAFT).respond_for("twitter_post", oversized);
    let orchestrator = orchestrator(copy, MockImageDriver::new_success());

    let result = orchestrator.run_content_only(&brief(&["twitter_post"])).await;

    let slot = &result.results[0];
    // No fatal error: the piece exists, flagged invalid, untouched.
    assert!(slot.error.is_none());
    let content = slot.content.as_ref().unwrap();
    assert_eq!(content.content.chars().count(), 300);
    assert!(!content.within_character_limit);
    assert!(!content.all_valid);
    assert!(!slot.ready_for_posting);
    assert_eq!(result.platforms_generated, 1);
    assert_eq!(result.ready_count, 0);
}

#[tokio::test]
async fn every_platform_gets_exactly_one_copy_call() {
    let copy = MockCopyDriver::new_success(VALID_DRAFT);
    let copy_calls = copy.call_counter();
    let orchestrator = orchestrator(copy, MockImageDriver::new_success());

    let brief = brief(&["instagram_feed", "linkedin_post", "twitter_post", "tiktok"]);
    orchestrator.run_content_only(&brief).await;

    assert_eq!(copy_calls.load(std::sync::atomic::Ordering::SeqCst), 4);
}

#[tokio::test]
async fn character_count_matches_published_serialization() {
    let copy = MockCopyDriver::new_success(VALID_DRAFT);
    let orchestrator = orchestrator(copy, MockImageDriver::new_success());

    let result = orchestrator.run_content_only(&brief(&["twitter_post"])).await;
    let content = result.results[0].content.as_ref().unwrap();

    let published = format!("{} {}", content.content, content.hashtag_string);
    assert_eq!(published.chars().count(), content.character_count);
    assert_eq!(content.hashtag_string, "#espresso #ai");
}
