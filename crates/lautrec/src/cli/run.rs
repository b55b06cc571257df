//! Command handlers for the lautrec binary.

use crate::cli::{EstimateArgs, OutputFormat, RunArgs};
use lautrec_campaign::{CampaignOrchestrator, CopyGenerator, GenerationSettings, ImageComposer};
use lautrec_core::{CampaignBriefBuilder, CampaignResult, ContentStyle, HashtagStrategy, ImageStyle};
use lautrec_interface::Health;
use lautrec_models::{ClientLimits, GeminiCopyClient, ImagenClient};
use lautrec_platforms::PlatformRegistry;
use lautrec_pricing::{
    CostEstimator, CostRequestBuilder, ImageModel, PriceBook, VideoModel,
};
use std::sync::Arc;

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn build_orchestrator(settings: &GenerationSettings) -> Result<CampaignOrchestrator, Box<dyn std::error::Error>> {
    let registry = Arc::new(PlatformRegistry::load()?);
    let estimator = Arc::new(CostEstimator::new(PriceBook::load()?));
    let limits = ClientLimits::new(settings.requests_per_minute, settings.max_concurrent);

    let copy_client = GeminiCopyClient::from_env(settings.text_model.clone())?
        .with_timeout(settings.text_timeout_secs)
        .with_max_retries(settings.max_retries)
        .with_limits(limits);
    let image_client = ImagenClient::from_env(settings.image_model.clone())?
        .with_timeout(settings.image_timeout_secs)
        .with_max_retries(settings.max_retries)
        .with_limits(limits);

    Ok(CampaignOrchestrator::new(
        registry,
        CopyGenerator::new(Arc::new(copy_client), Arc::clone(&estimator)),
        ImageComposer::new(Arc::new(image_client), estimator),
        settings.max_concurrent,
    ))
}

/// Run a campaign and print the result.
pub async fn run_campaign(args: RunArgs) -> CliResult {
    let style: ContentStyle = args.style.parse().map_err(|_| {
        format!("unknown style '{}'", args.style)
    })?;
    let hashtag_strategy: HashtagStrategy = args.hashtag_strategy.parse().map_err(|_| {
        format!("unknown hashtag strategy '{}'", args.hashtag_strategy)
    })?;

    let mut builder = CampaignBriefBuilder::default();
    builder
        .brief(args.brief)
        .platforms(args.platforms)
        .style(style)
        .hashtag_strategy(hashtag_strategy)
        .include_cta(!args.no_cta);
    if let Some(audience) = args.audience {
        builder.target_audience(audience);
    }
    if let Some(image_style) = &args.image_style {
        let parsed: ImageStyle = image_style
            .parse()
            .map_err(|_| format!("unknown image style '{image_style}'"))?;
        builder.image_style(parsed);
    }
    let brief = builder.build()?;

    let settings = GenerationSettings::load()?;
    let orchestrator = build_orchestrator(&settings)?;

    let result = if args.images {
        orchestrator.run(&brief).await
    } else {
        orchestrator.run_content_only(&brief).await
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print_campaign(&result),
    }

    Ok(())
}

fn print_campaign(result: &CampaignResult) {
    for slot in &result.results {
        match (&slot.content, &slot.error) {
            (Some(content), _) => {
                let status = if slot.ready_for_posting {
                    "ready"
                } else {
                    "not ready"
                };
                println!(
                    "[{}] {} ({} chars, {} tags)",
                    status, slot.platform, content.character_count, content.hashtag_count
                );
                println!("    {}", content.published_text());
                if let Some(image) = &slot.image
                    && !image.success
                {
                    println!(
                        "    image failed: {}",
                        image.failure_reason.as_deref().unwrap_or("unknown")
                    );
                }
            }
            (None, Some(error)) => {
                println!("[failed] {} - {}", slot.platform, error);
            }
            (None, None) => {
                println!("[failed] {}", slot.platform);
            }
        }
    }
    println!(
        "\n{}/{} ready, estimated cost ${:.4}",
        result.ready_count, result.platforms_requested, result.estimated_cost_usd
    );
}

/// Print the platform registry.
pub fn show_platforms() -> CliResult {
    let registry = PlatformRegistry::load()?;
    for id in registry.ids() {
        let spec = registry.get(id)?;
        let chars = spec
            .max_characters()
            .map_or("unlimited".to_string(), |c| c.to_string());
        println!(
            "{:<18} {:>9} chars  {:>2} tags  {}x{}  {}",
            id,
            chars,
            spec.max_hashtags(),
            spec.image_width(),
            spec.image_height(),
            spec.caption_style()
        );
    }
    Ok(())
}

/// Estimate campaign cost from resource counts and print the breakdown.
pub fn show_estimate(args: EstimateArgs) -> CliResult {
    let estimator = CostEstimator::new(PriceBook::load()?);
    let request = CostRequestBuilder::default()
        .images_1k(args.images_1k)
        .images_2k(args.images_2k)
        .video_seconds(args.video_seconds)
        .content_pieces(args.content_pieces)
        .image_model(ImageModel::classify(&args.image_model))
        .video_model(VideoModel::classify(&args.video_model))
        .build()?;

    let breakdown = estimator.estimate(&request)?;
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    Ok(())
}

/// Probe the generation services and print their status.
pub async fn show_health() -> CliResult {
    let settings = GenerationSettings::load()?;

    let text_status = match GeminiCopyClient::from_env(settings.text_model.clone()) {
        Ok(client) => client.health().await?,
        Err(e) => lautrec_interface::HealthStatus::Unhealthy {
            message: e.to_string(),
        },
    };
    let image_status = match ImagenClient::from_env(settings.image_model.clone()) {
        Ok(client) => client.health().await?,
        Err(e) => lautrec_interface::HealthStatus::Unhealthy {
            message: e.to_string(),
        },
    };
    let output_writable = std::fs::create_dir_all(&settings.output_dir).is_ok();

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "services": {
                "text": text_status,
                "image": image_status,
            },
            "output_directory": settings.output_dir,
            "output_directory_writable": output_writable,
        }))?
    );
    Ok(())
}
