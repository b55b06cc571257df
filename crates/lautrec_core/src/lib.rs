//! Core data types for the Lautrec campaign generation library.
//!
//! This crate provides the foundation data types used across all Lautrec
//! interfaces: the campaign brief, the per-platform artifacts produced by
//! the pipeline, and the request/response types exchanged with the
//! external generation collaborators.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod brief;
mod content;
mod outcome;
mod request;
mod telemetry;

pub use brief::{
    CampaignBrief, CampaignBriefBuilder, CampaignBriefBuilderError, ContentStyle, HashtagStrategy,
    ImageStyle,
};
pub use content::{ContentPiece, ImageArtifact};
pub use outcome::{CampaignResult, PlatformFailure, PlatformResult};
pub use request::{AspectRatio, CopyRequest, CopyResponse, ImageRequest, ImageResponse, ImageSize};
pub use telemetry::{init_telemetry, shutdown_telemetry};
