//! Lautrec - campaign content generation across social platforms.
//!
//! Lautrec turns a single campaign brief into validated, per-platform
//! marketing content (and matching images), each piece checked against
//! its destination's character, hashtag, and dimension constraints.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lautrec::{
//!     CampaignBriefBuilder, CampaignOrchestrator, CopyGenerator, CostEstimator,
//!     GeminiCopyClient, GenerationSettings, ImageComposer, ImagenClient,
//!     PlatformRegistry, PriceBook,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = GenerationSettings::load()?;
//!     let registry = Arc::new(PlatformRegistry::load()?);
//!     let estimator = Arc::new(CostEstimator::new(PriceBook::load()?));
//!
//!     let copywriter = CopyGenerator::new(
//!         Arc::new(GeminiCopyClient::from_env(settings.text_model.clone())?),
//!         Arc::clone(&estimator),
//!     );
//!     let composer = ImageComposer::new(
//!         Arc::new(ImagenClient::from_env(settings.image_model.clone())?),
//!         estimator,
//!     );
//!     let orchestrator =
//!         CampaignOrchestrator::new(registry, copywriter, composer, settings.max_concurrent);
//!
//!     let brief = CampaignBriefBuilder::default()
//!         .brief("Launch of our AI-powered espresso machine")
//!         .platforms(vec!["instagram_feed".into(), "twitter_post".into()])
//!         .build()?;
//!
//!     let result = orchestrator.run(&brief).await;
//!     println!("{} of {} platforms ready", result.ready_count, result.platforms_requested);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Lautrec is organized as a workspace with focused crates:
//!
//! - `lautrec_error` - Error types
//! - `lautrec_core` - Core data types (briefs, artifacts, results)
//! - `lautrec_platforms` - Platform constraint registry and validation
//! - `lautrec_pricing` - Price book and cost estimation
//! - `lautrec_interface` - Driver traits for the generation collaborators
//! - `lautrec_models` - Gemini/Imagen clients with rate limiting and retry
//! - `lautrec_campaign` - The batch-generation pipeline
//! - `lautrec_mcp` - MCP tool server over stdio
//!
//! This crate (`lautrec`) re-exports everything for convenience.

// Re-export core crates
pub use lautrec_campaign::*;
pub use lautrec_core::*;
pub use lautrec_error::*;
pub use lautrec_interface::*;
pub use lautrec_models::*;
pub use lautrec_platforms::*;
pub use lautrec_pricing::*;
