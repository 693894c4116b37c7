//! Shared content-safety denylists and the brief sanitizer.
//!
//! Every strategy output that carries free text passes through this module:
//! the experiment library is statically verified against the urgency and
//! story lists, brief fields are sanitized at construction, and compiled
//! drafting prompts are hard-gated against the prohibited-phrase list.

use std::sync::LazyLock;

use regex::Regex;

/// Urgency calls-to-action never allowed in charter-safe material.
pub const URGENCY_CTA_PHRASES: &[&str] = &[
    "call now",
    "act now",
    "act fast",
    "limited spots",
    "don't wait",
    "last chance",
    "hurry",
    "spots are filling",
    "before it's too late",
    "today only",
];

/// Individual-story framings that require consent workflows outside this
/// engine's scope; strategy output never proposes them.
pub const STORY_PHRASES: &[&str] = &["patient story", "client story"];

/// Outcome-claim phrases prohibited in briefs and drafting prompts.
/// "guarantee" is deliberately a stem so it also catches "guarantees" and
/// "guaranteed".
pub const PROHIBITED_PHRASES: &[&str] = &[
    "will cure",
    "guarantee",
    "clinically proven",
    "100% success",
    "miracle cure",
    "risk-free",
];

/// Clinical-outcome terms stripped from success-signal lists; the engine
/// only recommends process measures.
pub const BANNED_OUTCOME_TERMS: &[&str] = &[
    "clinical outcome",
    "recovery rate",
    "cure",
    "remission",
    "success rate",
    "relapse rate",
    "symptom-free",
];

/// Explicit approval-gate phrasing that flags a required review workflow.
pub const APPROVAL_GATE_PHRASES: &[&str] = &[
    "approval required",
    "requires approval",
    "needs approval",
    "pending approval",
    "must be approved",
    "sign-off",
    "sign off",
];

/// One sanitizer rule. `replace_with: None` means a match discards the whole
/// field in favor of its safe fallback; `Some` substitutes in place.
pub(crate) struct SanitizerRule {
    pub pattern: &'static str,
    pub replace_with: Option<&'static str>,
}

pub(crate) const SANITIZER_RULES: &[SanitizerRule] = &[
    SanitizerRule {
        pattern: r"(?i)will cure",
        replace_with: None,
    },
    SanitizerRule {
        pattern: r"(?i)guarantee(?:s|d)?",
        replace_with: Some("is designed to support"),
    },
    SanitizerRule {
        pattern: r"(?i)clinically proven",
        replace_with: Some("evidence-informed"),
    },
    SanitizerRule {
        pattern: r"(?i)100% success",
        replace_with: None,
    },
    SanitizerRule {
        pattern: r"(?i)miracle",
        replace_with: None,
    },
    SanitizerRule {
        pattern: r"(?i)promises? recovery",
        replace_with: Some("supports recovery goals"),
    },
    SanitizerRule {
        pattern: r"(?i)risk-free",
        replace_with: Some("supportive"),
    },
];

static COMPILED_SANITIZER: LazyLock<Vec<(Regex, Option<&'static str>)>> = LazyLock::new(|| {
    SANITIZER_RULES
        .iter()
        .map(|rule| {
            (
                Regex::new(rule.pattern).expect("static sanitizer pattern compiles"),
                rule.replace_with,
            )
        })
        .collect()
});

/// Applies the sanitizer rules to one derived field. A match on a
/// no-replacement rule reverts the entire field to its fallback.
pub(crate) fn sanitize_field(value: &str, fallback: &str) -> String {
    let mut current = value.to_string();
    for (pattern, replace_with) in COMPILED_SANITIZER.iter() {
        if !pattern.is_match(&current) {
            continue;
        }
        match replace_with {
            Some(replacement) => {
                current = pattern.replace_all(&current, *replacement).into_owned();
            }
            None => return fallback.to_string(),
        }
    }
    current
}

/// Returns the first prohibited phrase found in `text`, if any.
pub(crate) fn find_prohibited_phrase(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    PROHIBITED_PHRASES
        .iter()
        .copied()
        .find(|phrase| lowered.contains(phrase))
}

/// Returns the first banned outcome term found in `text`, if any.
pub(crate) fn find_banned_outcome_term(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    BANNED_OUTCOME_TERMS
        .iter()
        .copied()
        .find(|term| lowered.contains(term))
}

/// Returns true when `text` contains urgency or individual-story phrasing.
/// Used by the static experiment-library invariant tests.
pub(crate) fn violates_charter(text: &str) -> bool {
    let lowered = text.to_lowercase();
    URGENCY_CTA_PHRASES
        .iter()
        .chain(STORY_PHRASES.iter())
        .any(|phrase| lowered.contains(phrase))
}
