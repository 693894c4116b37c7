use serde::{Deserialize, Serialize};

/// Content larger than this is a caller precondition violation; validators
/// are linear scans and never truncate or reject on their own.
pub const MAX_CONTENT_CHARS: usize = 50_000;

/// Kebab-case identifiers for the policies known to the scoring table.
///
/// Policy ids travel as plain strings so that scoring can skip ids it does
/// not recognize instead of failing to represent them.
pub mod policy {
    pub const MEDICAL_CLAIMS: &str = "medical-claims";
    pub const STIGMA_LANGUAGE: &str = "stigma-language";
    pub const DSM5_TERMINOLOGY: &str = "dsm5-terminology";
    pub const TREATMENT_QUALIFICATION: &str = "treatment-qualification";
    pub const SUICIDE_SAFETY: &str = "suicide-safety";
    pub const CONSENT: &str = "consent";
    pub const CUSTOM_PATTERNS: &str = "custom-patterns";
    pub const REQUIRED_PHRASES: &str = "required-phrases";

    /// The six built-in validators, in canonical order.
    pub const BUILT_IN: [&str; 6] = [
        MEDICAL_CLAIMS,
        STIGMA_LANGUAGE,
        DSM5_TERMINOLOGY,
        TREATMENT_QUALIFICATION,
        SUICIDE_SAFETY,
        CONSENT,
    ];
}

/// Informational ranking attached to each violation; scoring weights are
/// keyed by policy id, not severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// One detected policy breach, located within (or spanning all of) the
/// scanned content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub policy_id: String,
    pub severity: Severity,
    /// Contextual snippet around the match, or a fixed descriptive string
    /// for whole-content checks.
    pub text: String,
    /// Rationale specific enough to guide a rewrite.
    pub explanation: String,
    /// Character offset into the original content; `0` together with
    /// `end_index == 0` marks a whole-content violation.
    pub start_index: usize,
    pub end_index: usize,
}

impl Violation {
    /// Builds a positional violation from regex byte offsets, converting to
    /// character offsets and capturing a padded snippet.
    pub(crate) fn at_match(
        policy_id: &str,
        severity: Severity,
        content: &str,
        byte_start: usize,
        byte_end: usize,
        snippet_pad: usize,
        explanation: String,
    ) -> Self {
        let start_index = content[..byte_start].chars().count();
        let end_index = start_index + content[byte_start..byte_end].chars().count();
        Self {
            policy_id: policy_id.to_string(),
            severity,
            text: snippet(content, byte_start, byte_end, snippet_pad),
            explanation,
            start_index,
            end_index,
        }
    }

    /// Builds a whole-content violation (`start_index == end_index == 0`).
    pub(crate) fn whole_content(
        policy_id: &str,
        severity: Severity,
        text: &str,
        explanation: String,
    ) -> Self {
        Self {
            policy_id: policy_id.to_string(),
            severity,
            text: text.to_string(),
            explanation,
            start_index: 0,
            end_index: 0,
        }
    }

    pub fn is_whole_content(&self) -> bool {
        self.start_index == 0 && self.end_index == 0
    }
}

/// Extracts up to `pad` characters of context on each side of a byte-offset
/// match, always slicing on char boundaries.
pub(crate) fn snippet(content: &str, byte_start: usize, byte_end: usize, pad: usize) -> String {
    let lead_start = content[..byte_start]
        .char_indices()
        .rev()
        .nth(pad.saturating_sub(1))
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let tail_end = content[byte_end..]
        .char_indices()
        .nth(pad)
        .map(|(idx, _)| byte_end + idx)
        .unwrap_or(content.len());
    content[lead_start..tail_end].to_string()
}

/// Merges validator outputs and sorts by start offset so whole-content
/// violations surface together at the front.
pub(crate) fn sort_violations(mut violations: Vec<Violation>) -> Vec<Violation> {
    violations.sort_by_key(|violation| violation.start_index);
    violations
}
