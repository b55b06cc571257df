//! Campaign batch-generation pipeline.
//!
//! A single [`lautrec_core::CampaignBrief`] fans out across its requested
//! platforms. Each platform gets its own pipeline: spec lookup, copy
//! generation, validation, and (optionally) image generation. Pipelines
//! run concurrently under a bounded worker pool and are mutually
//! isolated: one platform failing never prevents another from
//! succeeding or being reported.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod copywriter;
mod extraction;
mod orchestrator;
mod prompt;
mod settings;

pub use composer::ImageComposer;
pub use copywriter::CopyGenerator;
pub use extraction::{extract_json, parse_json};
pub use orchestrator::CampaignOrchestrator;
pub use prompt::{copy_prompt, image_prompt};
pub use settings::GenerationSettings;
