//! Campaign fan-out, bounded concurrency, and ordered fan-in.

use crate::{CopyGenerator, ImageComposer};
use lautrec_core::{CampaignBrief, CampaignResult, PlatformFailure, PlatformResult};
use lautrec_error::{CopyErrorKind, LautrecError, LautrecErrorKind};
use lautrec_platforms::PlatformRegistry;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, instrument, warn};

/// Fans a single campaign brief out across its requested platforms.
///
/// Partial-failure isolation is the core invariant: every per-platform
/// error is caught at the platform-pipeline boundary and converted into
/// that slot's [`PlatformResult`]; it never aborts another platform or
/// the batch. Unknown platforms keep their slot, so the output length
/// always equals the input length and callers can zip results back to
/// their request positionally.
pub struct CampaignOrchestrator {
    registry: Arc<PlatformRegistry>,
    copywriter: Arc<CopyGenerator>,
    composer: Arc<ImageComposer>,
    max_concurrent: usize,
}

impl std::fmt::Debug for CampaignOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampaignOrchestrator")
            .field("platforms", &self.registry.len())
            .field("max_concurrent", &self.max_concurrent)
            .finish_non_exhaustive()
    }
}

impl CampaignOrchestrator {
    /// Assemble an orchestrator from its collaborators.
    ///
    /// `max_concurrent` bounds simultaneously running platform pipelines;
    /// values below one are clamped to one.
    pub fn new(
        registry: Arc<PlatformRegistry>,
        copywriter: CopyGenerator,
        composer: ImageComposer,
        max_concurrent: usize,
    ) -> Self {
        Self {
            registry,
            copywriter: Arc::new(copywriter),
            composer: Arc::new(composer),
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Run the full pipeline: copy plus an image for every platform.
    #[instrument(skip(self, brief), fields(platforms = brief.platforms().len()))]
    pub async fn run(&self, brief: &CampaignBrief) -> CampaignResult {
        self.execute(brief, true).await
    }

    /// Run the content-only path, skipping image generation entirely.
    #[instrument(skip(self, brief), fields(platforms = brief.platforms().len()))]
    pub async fn run_content_only(&self, brief: &CampaignBrief) -> CampaignResult {
        self.execute(brief, false).await
    }

    async fn execute(&self, brief: &CampaignBrief, with_images: bool) -> CampaignResult {
        let brief = Arc::new(brief.clone());
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let platform_count = brief.platforms().len();

        let mut tasks = JoinSet::new();
        for (index, platform) in brief.platforms().iter().cloned().enumerate() {
            let registry = Arc::clone(&self.registry);
            let copywriter = Arc::clone(&self.copywriter);
            let composer = Arc::clone(&self.composer);
            let semaphore = Arc::clone(&semaphore);
            let brief = Arc::clone(&brief);

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("Semaphore should not be closed");
                let result =
                    run_platform(registry, copywriter, composer, brief, platform, with_images)
                        .await;
                (index, result)
            });
        }

        // Fan-in: re-index completions into request order.
        let mut slots: Vec<Option<PlatformResult>> = Vec::with_capacity(platform_count);
        slots.resize_with(platform_count, || None);

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => error!(error = %e, "Platform pipeline task did not complete"),
            }
        }

        // A slot left empty means its task panicked or was aborted; the
        // platform is all-or-nothing, so report it failed.
        let results = slots
            .into_iter()
            .zip(brief.platforms())
            .map(|(slot, platform)| {
                slot.unwrap_or_else(|| {
                    PlatformResult::copy_failed(
                        platform.clone(),
                        PlatformFailure::ServiceFailed {
                            message: "platform pipeline aborted".to_string(),
                        },
                    )
                })
            })
            .collect();

        CampaignResult::from_results(results)
    }
}

/// One platform's pipeline: lookup, copy, optional image, readiness.
///
/// Terminal states only, no internal retry loop; retries belong to the
/// drivers.
async fn run_platform(
    registry: Arc<PlatformRegistry>,
    copywriter: Arc<CopyGenerator>,
    composer: Arc<ImageComposer>,
    brief: Arc<CampaignBrief>,
    platform: String,
    with_images: bool,
) -> PlatformResult {
    let spec = match registry.get(&platform) {
        Ok(spec) => spec.clone(),
        Err(e) => {
            warn!(platform = %platform, error = %e, "Requested platform is not in the registry");
            return PlatformResult::unknown_platform(platform);
        }
    };

    let piece = match copywriter.generate(&brief, &platform, &spec).await {
        Ok(piece) => piece,
        Err(e) => {
            warn!(platform = %platform, error = %e, "Copy generation failed");
            return PlatformResult::copy_failed(platform, copy_failure(&e));
        }
    };

    // An image failure does not invalidate the copy above; it only
    // removes this platform from the ready set.
    let image = if with_images {
        Some(composer.compose(&brief, &platform, &spec).await)
    } else {
        None
    };

    let ready_for_posting = piece.all_valid && image.as_ref().is_none_or(|a| a.success);

    PlatformResult {
        platform,
        content: Some(piece),
        image,
        ready_for_posting,
        error: None,
    }
}

/// Map a copy-path error into the per-platform failure taxonomy.
fn copy_failure(error: &LautrecError) -> PlatformFailure {
    match error.kind() {
        LautrecErrorKind::Copy(copy_error) => match &copy_error.kind {
            CopyErrorKind::Timeout(seconds) => PlatformFailure::CopyTimedOut { seconds: *seconds },
            CopyErrorKind::Rejected(message) => PlatformFailure::CopyRejected {
                message: message.clone(),
            },
            other => PlatformFailure::ServiceFailed {
                message: other.to_string(),
            },
        },
        other => PlatformFailure::ServiceFailed {
            message: other.to_string(),
        },
    }
}
