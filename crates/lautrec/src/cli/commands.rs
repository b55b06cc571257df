//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Lautrec - per-platform campaign content and image generation from a single brief
#[derive(Parser, Debug)]
#[command(name = "lautrec")]
#[command(about = "Per-platform campaign content and image generation from a single brief", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a campaign across the requested platforms
    Run(RunArgs),

    /// List the platform registry with its constraints
    Platforms,

    /// Estimate campaign cost from resource counts
    Estimate(EstimateArgs),

    /// Probe the generation services and output directory
    Health,
}

/// Arguments for campaign generation
#[derive(Args, Debug)]
pub struct RunArgs {
    /// The campaign brief: what to promote
    pub brief: String,

    /// Comma-separated destination platforms
    #[arg(long, value_delimiter = ',', required = true)]
    pub platforms: Vec<String>,

    /// Voice of the generated copy
    #[arg(long, default_value = "professional")]
    pub style: String,

    /// Hashtag selection strategy
    #[arg(long, default_value = "industry-specific")]
    pub hashtag_strategy: String,

    /// Audience the copy should address
    #[arg(long)]
    pub audience: Option<String>,

    /// Generate a platform-dimensioned image per platform
    #[arg(long)]
    pub images: bool,

    /// Visual treatment for generated images
    #[arg(long)]
    pub image_style: Option<String>,

    /// Skip the call to action
    #[arg(long)]
    pub no_cta: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for cost estimation
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Number of 1K resolution images
    #[arg(long, default_value_t = 0)]
    pub images_1k: i64,

    /// Number of 2K resolution images
    #[arg(long, default_value_t = 0)]
    pub images_2k: i64,

    /// Total seconds of video
    #[arg(long, default_value_t = 0)]
    pub video_seconds: i64,

    /// Number of content pieces
    #[arg(long, default_value_t = 0)]
    pub content_pieces: i64,

    /// Image model to price against
    #[arg(long, default_value = "imagen-3.0")]
    pub image_model: String,

    /// Video model to price against
    #[arg(long, default_value = "veo3")]
    pub video_model: String,
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
