//! Utilities for extracting structured data from collaborator responses.
//!
//! LLM responses often wrap JSON in markdown code blocks or mix it with
//! explanatory text. This module provides robust extraction utilities
//! that handle the common response patterns.

use lautrec_error::{JsonError, LautrecResult};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// This function tries multiple extraction strategies:
/// 1. Markdown code blocks: ```json ... ```
/// 2. Balanced braces: { ... }
/// 3. Balanced brackets: [ ... ]
///
/// # Errors
///
/// Returns an error if no valid JSON is found in the response.
///
/// # Examples
///
/// ```
/// use lautrec_campaign::extract_json;
///
/// let response = "Here's your post:\n\
///     \n\
///     ```json\n\
///     {\"content\": \"Hello\", \"hashtags\": [\"rust\"]}\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("Hello"));
/// ```
pub fn extract_json(response: &str) -> LautrecResult<String> {
    // Strategy 1: Extract from markdown code blocks
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    // Strategy 2: Balanced delimiters, whichever opens first
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
        }
        (Some(_), None) => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
        _ => {
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in collaborator response"
    );

    Err(JsonError::new(format!(
        "No JSON found in response (length: {}). Hint: Ensure the prompt explicitly requests JSON output.",
        response.len()
    ))
    .into())
}

/// Extract content from markdown code blocks.
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    // Pattern: ```language\n...\n```
    let pattern = format!("```{}", language);

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence found - likely truncated response
        return Some(response[content_start..].trim().to_string());
    }

    // Try without language specifier
    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip to next newline (in case there's a language specifier)
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            let content = &response[skip_to..skip_to + end];
            return Some(content.trim().to_string());
        }
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to
/// the matching `close`, handling nesting and string literals correctly.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse and validate JSON, returning a specific type.
///
/// # Errors
///
/// Returns an error if the JSON string cannot be parsed into type `T`.
///
/// # Examples
///
/// ```
/// use lautrec_campaign::parse_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Draft {
///     content: String,
/// }
///
/// let json = r#"{"content": "Hello"}"#;
/// let draft: Draft = parse_json(json).unwrap();
/// assert_eq!(draft.content, "Hello");
/// ```
pub fn parse_json<T>(json_str: &str) -> LautrecResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        JsonError::new(format!("Failed to parse JSON: {} (JSON: {}...)", e, preview)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_json_from_code_block() {
        let response = r#"
Here's the post you requested:

```json
{
  "content": "Big launch day",
  "hashtags": ["launch"]
}
```

Hope this helps!
"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("Big launch day"));
    }

    #[test]
    fn extracts_json_from_balanced_braces() {
        let response = r#"
Sure! Here it is: {"content": "Hi", "nested": {"value": "test"}}
"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(json.contains("nested"));
    }

    #[test]
    fn extracts_json_array() {
        let response = r#"
Items:
[
  {"id": 1},
  {"id": 2}
]
"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn no_json_found_is_an_error() {
        let response = "This is just plain text with no JSON";
        assert!(extract_json(response).is_err());
    }

    #[test]
    fn handles_string_escapes() {
        let response = r#"{"content": "She said \"hello\""}"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("She said"));
    }

    #[test]
    fn braces_inside_strings_do_not_confuse_extraction() {
        let response = r#"prefix {"content": "curly { inside"} suffix"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"content": "curly { inside"}"#);
    }

    #[test]
    fn parse_json_into_struct() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug)]
        struct Draft {
            content: String,
            hashtags: Vec<String>,
        }

        let json = r#"{"content": "post", "hashtags": ["a", "b"]}"#;
        let draft: Draft = parse_json(json).unwrap();
        assert_eq!(draft.content, "post");
        assert_eq!(draft.hashtags.len(), 2);
    }

    #[test]
    fn parse_json_reports_malformed_input() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug)]
        struct Draft {
            #[allow(dead_code)]
            content: String,
        }

        assert!(parse_json::<Draft>("{\"content\": 42}").is_err());
    }
}
