//! Copy generation: prompt, delegate, structure, validate.

use crate::extraction::{extract_json, parse_json};
use crate::prompt::copy_prompt;
use lautrec_core::{CampaignBrief, ContentPiece, CopyRequest};
use lautrec_error::{CopyError, CopyErrorKind, LautrecResult};
use lautrec_interface::CopyDriver;
use lautrec_platforms::{PlatformSpec, format_hashtags, validate};
use lautrec_pricing::CostEstimator;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// The structured shape the collaborator is asked to answer with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct DraftCopy {
    content: String,
    #[serde(default)]
    hashtags: Vec<String>,
    #[serde(default)]
    cta: Option<String>,
}

/// Produces platform-tailored copy by delegating to the copywriting
/// collaborator exactly once per piece, then validating the result.
///
/// Over-limit copy is surfaced as-is with its validation flags set to
/// false; the caller decides whether to accept, regenerate, or discard.
/// Nothing is silently truncated.
#[derive(Clone, derive_new::new)]
pub struct CopyGenerator {
    driver: Arc<dyn CopyDriver>,
    estimator: Arc<CostEstimator>,
}

impl std::fmt::Debug for CopyGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish_non_exhaustive()
    }
}

impl CopyGenerator {
    /// Generate a validated [`ContentPiece`] for one platform.
    ///
    /// # Errors
    ///
    /// Returns the driver's failure (timeout, HTTP, transport) or a
    /// `Rejected` error when the response cannot be structured. Errors
    /// are reported per platform by the orchestrator; they never cross
    /// platform boundaries.
    #[instrument(skip(self, brief, spec), fields(platform = %platform))]
    pub async fn generate(
        &self,
        brief: &CampaignBrief,
        platform: &str,
        spec: &PlatformSpec,
    ) -> LautrecResult<ContentPiece> {
        let request = CopyRequest {
            prompt: copy_prompt(brief, platform, spec),
            max_tokens: Some(1024),
            temperature: Some(0.7),
            model: None,
        };

        let response = self.driver.write_copy(&request).await?;
        let draft = parse_draft(&response.text)?;

        let hashtags = normalize_hashtags(&draft.hashtags);
        let report = validate(&draft.content, &hashtags, spec);
        let cost = self.estimator.content_piece_cost(response.billable_tokens());

        debug!(
            characters = report.character_count,
            hashtags = report.hashtag_count,
            valid = report.all_valid,
            "Copy generated"
        );

        let hashtag_string = format_hashtags(&hashtags);
        Ok(ContentPiece {
            platform: platform.to_string(),
            content: draft.content,
            hashtags,
            hashtag_string,
            call_to_action: if *brief.include_cta() {
                draft.cta.filter(|cta| !cta.trim().is_empty())
            } else {
                None
            },
            character_count: report.character_count,
            character_limit: *spec.max_characters(),
            within_character_limit: report.within_character_limit,
            hashtag_count: report.hashtag_count,
            hashtag_limit: *spec.max_hashtags(),
            within_hashtag_limit: report.within_hashtag_limit,
            all_valid: report.all_valid,
            estimated_cost_usd: cost,
        })
    }
}

/// Structure the collaborator's raw text into a draft.
fn parse_draft(text: &str) -> Result<DraftCopy, CopyError> {
    let json = extract_json(text)
        .map_err(|e| CopyError::new(CopyErrorKind::Rejected(e.to_string())))?;
    parse_json::<DraftCopy>(&json)
        .map_err(|e| CopyError::new(CopyErrorKind::Rejected(e.to_string())))
}

/// Normalize hashtag tokens: strip the leading `#`, trim whitespace, drop
/// empties, and deduplicate while preserving first-seen order.
fn normalize_hashtags(raw: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut tags = Vec::new();
    for tag in raw {
        let cleaned = tag.trim().trim_start_matches('#').trim().to_string();
        if cleaned.is_empty() {
            continue;
        }
        if seen.insert(cleaned.to_lowercase()) {
            tags.push(cleaned);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtags_are_stripped_and_deduplicated() {
        let raw = vec![
            "#Launch".to_string(),
            "coffee".to_string(),
            "launch".to_string(),
            "  ".to_string(),
            "#coffee".to_string(),
        ];
        assert_eq!(normalize_hashtags(&raw), vec!["Launch", "coffee"]);
    }

    #[test]
    fn draft_parses_with_missing_optional_fields() {
        let draft = parse_draft(r#"{"content": "just text"}"#).unwrap();
        assert_eq!(draft.content, "just text");
        assert!(draft.hashtags.is_empty());
        assert!(draft.cta.is_none());
    }

    #[test]
    fn unparsable_response_is_rejected() {
        let error = parse_draft("sorry, I cannot help with that").unwrap_err();
        assert!(matches!(error.kind, CopyErrorKind::Rejected(_)));
    }
}
