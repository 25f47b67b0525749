//! Fenced-block extraction from free-text model answers.
//!
//! Models are asked to answer with one ```` ```json ```` block followed by
//! commentary. The block becomes the structured payload and everything
//! else becomes the prose shown to the visitor.
//!
//! Only the first block is considered. Later blocks stay in the prose
//! untouched; this is a known limitation, not an error.

use serde_json::Value;

/// Opening fence marker (before the language tag).
const FENCE: &str = "```";

/// Language tag that marks a fence as structured data. Matched
/// ASCII-case-insensitively.
const JSON_TAG: &str = "json";

/// A model answer split into prose and an optional parsed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedResponse {
    pub prose: String,
    pub payload: Option<Value>,
}

impl ExtractedResponse {
    fn prose_only(raw: &str) -> Self {
        Self {
            prose: raw.trim().to_string(),
            payload: None,
        }
    }
}

/// Byte offsets of a fenced block inside the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FencedBlock {
    /// Start of the opening fence.
    start: usize,
    /// Start of the interior, just after the language tag.
    body_start: usize,
    /// Start of the closing fence.
    body_end: usize,
    /// Just after the closing fence.
    end: usize,
}

/// Splits model answers into prose and structured payload.
#[derive(Debug, Clone, Default)]
pub struct ResponseExtractor;

impl ResponseExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the first ```` ```json ```` block.
    ///
    /// Never fails: a missing, unterminated or unparsable block yields
    /// `payload: None` and the whole trimmed input as prose.
    pub fn extract(&self, raw: &str) -> ExtractedResponse {
        let Some(block) = find_json_block(raw) else {
            return ExtractedResponse::prose_only(raw);
        };

        let candidate = raw[block.body_start..block.body_end].trim();
        match serde_json::from_str::<Value>(candidate) {
            Ok(payload) => {
                let mut prose = String::with_capacity(raw.len() - (block.end - block.start));
                prose.push_str(&raw[..block.start]);
                prose.push_str(&raw[block.end..]);
                ExtractedResponse {
                    prose: prose.trim().to_string(),
                    payload: Some(payload),
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "fenced block is not valid JSON, falling back to prose");
                ExtractedResponse::prose_only(raw)
            }
        }
    }
}

/// Convenience wrapper around [`ResponseExtractor::extract`].
pub fn extract_response(raw: &str) -> ExtractedResponse {
    ResponseExtractor::new().extract(raw)
}

fn find_json_block(raw: &str) -> Option<FencedBlock> {
    let (start, body_start) = raw
        .match_indices(FENCE)
        .map(|(idx, _)| idx)
        .find_map(|idx| json_tag_end(raw, idx).map(|body_start| (idx, body_start)))?;

    let body_end = body_start + raw[body_start..].find(FENCE)?;
    Some(FencedBlock {
        start,
        body_start,
        body_end,
        end: body_end + FENCE.len(),
    })
}

/// If a fence at `fence_idx` carries the json tag, returns the offset just
/// past the tag. `jsonl`, `json5` and similar tags do not count.
fn json_tag_end(raw: &str, fence_idx: usize) -> Option<usize> {
    let tag_start = fence_idx + FENCE.len();
    let tag_end = tag_start + JSON_TAG.len();
    let tag = raw.get(tag_start..tag_end)?;
    if !tag.eq_ignore_ascii_case(JSON_TAG) {
        return None;
    }
    match raw[tag_end..].chars().next() {
        Some(c) if c.is_alphanumeric() => None,
        _ => Some(tag_end),
    }
}
