//! Pure validation of generated copy against a platform spec.

use crate::PlatformSpec;
use serde::{Deserialize, Serialize};

/// Outcome of validating copy against a [`PlatformSpec`].
///
/// An over-limit result is reported, not raised; the caller decides
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Length in characters of the full published string
    pub character_count: usize,
    /// Whether the published string fits the platform's character ceiling
    pub within_character_limit: bool,
    /// Number of hashtag tokens
    pub hashtag_count: usize,
    /// Whether the hashtags fit the count and per-tag length ceilings
    pub within_hashtag_limit: bool,
    /// Conjunction of both limit checks
    pub all_valid: bool,
}

/// Format hashtag tokens for publication, e.g. `["rust", "ai"]` ->
/// `"#rust #ai"`.
pub fn format_hashtags(hashtags: &[String]) -> String {
    hashtags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The full post string exactly as it would be published: content, a
/// separating space, then the formatted hashtags.
pub fn published_text(content: &str, hashtags: &[String]) -> String {
    if hashtags.is_empty() {
        content.to_string()
    } else {
        format!("{} {}", content, format_hashtags(hashtags))
    }
}

/// Validate copy and hashtags against a platform spec.
///
/// Pure and deterministic: no I/O, no clock, no randomness. Character
/// counts are Unicode scalar values, not bytes, and are computed over the
/// published string so the validator can never disagree with serialized
/// output.
///
/// # Examples
///
/// ```
/// use lautrec_platforms::{PlatformRegistry, validate};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = PlatformRegistry::builtin()?;
/// let spec = registry.get("twitter_post")?;
/// let hashtags = vec!["rust".to_string()];
/// let report = validate("Short and sweet", &hashtags, spec);
/// assert!(report.all_valid);
/// # Ok(())
/// # }
/// ```
pub fn validate(content: &str, hashtags: &[String], spec: &PlatformSpec) -> Validation {
    let character_count = published_text(content, hashtags).chars().count();

    let within_character_limit = match spec.max_characters() {
        Some(limit) => character_count <= *limit as usize,
        None => true,
    };

    let hashtag_count = hashtags.len();
    let within_hashtag_limit = hashtag_count <= *spec.max_hashtags() as usize
        && hashtags
            .iter()
            .all(|tag| tag.chars().count() <= *spec.max_hashtag_length() as usize);

    Validation {
        character_count,
        within_character_limit,
        hashtag_count,
        within_hashtag_limit,
        all_valid: within_character_limit && within_hashtag_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptionStyle;

    fn spec(max_characters: Option<u32>, max_hashtags: u32) -> PlatformSpec {
        let toml = format!(
            r#"
            {}
            max_hashtags = {}
            max_hashtag_length = 20
            image_width = 1080
            image_height = 1080
            caption_style = "minimal"
            "#,
            max_characters.map_or(String::new(), |c| format!("max_characters = {c}")),
            max_hashtags,
        );
        toml::from_str(&toml).unwrap()
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn counts_cover_the_published_string() {
        let spec = spec(Some(280), 5);
        let hashtags = tags(&["rust", "ai"]);
        let report = validate("Hello world", &hashtags, &spec);
        // "Hello world #rust #ai"
        assert_eq!(report.character_count, 21);
        assert!(report.all_valid);
    }

    #[test]
    fn exactly_at_limit_is_valid() {
        let spec = spec(Some(14), 1);
        let hashtags = tags(&["go"]);
        // "at the brk #go" = 14 chars
        let report = validate("at the brk", &hashtags, &spec);
        assert_eq!(report.character_count, 14);
        assert!(report.within_character_limit);
        assert!(report.all_valid);
    }

    #[test]
    fn one_over_limit_is_flagged() {
        let spec = spec(Some(13), 1);
        let report = validate("at the brk", &tags(&["go"]), &spec);
        assert_eq!(report.character_count, 14);
        assert!(!report.within_character_limit);
        assert!(!report.all_valid);
    }

    #[test]
    fn too_many_hashtags_are_flagged() {
        let spec = spec(Some(280), 2);
        let report = validate("post", &tags(&["a", "b", "c"]), &spec);
        assert!(report.within_character_limit);
        assert!(!report.within_hashtag_limit);
        assert!(!report.all_valid);
    }

    #[test]
    fn overlong_hashtag_is_flagged() {
        let spec = spec(Some(280), 5);
        let report = validate("post", &tags(&["averyveryverylongtagindeed"]), &spec);
        assert!(!report.within_hashtag_limit);
    }

    #[test]
    fn no_limit_platform_accepts_any_length() {
        let spec = spec(None, 0);
        let long = "x".repeat(100_000);
        let report = validate(&long, &[], &spec);
        assert!(report.within_character_limit);
        assert!(report.all_valid);
    }

    #[test]
    fn empty_hashtags_add_no_separator() {
        assert_eq!(published_text("solo", &[]), "solo");
        let spec = spec(Some(4), 5);
        assert!(validate("solo", &[], &spec).all_valid);
    }

    #[test]
    fn character_count_is_scalar_values_not_bytes() {
        let spec = spec(Some(10), 0);
        let report = validate("héllo ☕", &[], &spec);
        assert_eq!(report.character_count, 7);
        assert!(report.all_valid);
    }
}
