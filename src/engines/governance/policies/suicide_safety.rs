use crate::engines::governance::domain::{policy, Severity, Violation};

/// Phrases indicating the content discusses suicide or self-harm.
const DISCUSSION_TERMS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "killing myself",
    "end my life",
    "ending my life",
    "take my own life",
    "self-harm",
    "self harm",
    "hurt myself",
    "harming myself",
    "want to die",
    "wanted to die",
    "better off dead",
    "no reason to live",
    "don't want to live",
    "ending it all",
    "end it all",
    "thoughts of death",
    "suicidal ideation",
];

/// Whole-content gate: discussing suicide or self-harm requires crisis
/// resources (988 Suicide & Crisis Lifeline or the Crisis Text Line) to
/// appear in the same content. Highest-weighted policy in scoring.
pub(crate) async fn check(content: &str) -> Vec<Violation> {
    let lowered = content.to_lowercase();
    let discusses = DISCUSSION_TERMS.iter().any(|term| lowered.contains(term));
    if !discusses {
        return Vec::new();
    }

    let lifeline_present = lowered.contains("988")
        && (lowered.contains("lifeline") || lowered.contains("crisis") || lowered.contains("suicide"));
    let text_line_present = lowered.contains("741741")
        || (lowered.contains("crisis text line") && lowered.contains("home"));
    if lifeline_present || text_line_present {
        return Vec::new();
    }

    vec![Violation::whole_content(
        policy::SUICIDE_SAFETY,
        Severity::High,
        "Content discusses suicide or self-harm without crisis resources",
        "Content referencing suicide or self-harm must include crisis resources: the 988 Suicide & Crisis Lifeline or the Crisis Text Line (text HOME to 741741).".to_string(),
    )]
}
