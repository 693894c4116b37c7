use crate::engines::governance::domain::{policy, Severity, Violation};

/// Phrases indicating the content shares a patient or client story.
const STORY_INDICATORS: &[&str] = &[
    "testimonial",
    "success story",
    "patient story",
    "client story",
    "in her own words",
    "in his own words",
    "in their own words",
    "shared her experience",
    "shared his experience",
    "shared their experience",
    "one of our patients",
    "one of our clients",
    "a former patient",
];

/// Phrases acknowledging that sharing was authorized.
const CONSENT_ACKNOWLEDGMENTS: &[&str] = &[
    "written consent",
    "informed consent",
    "with consent",
    "with their consent",
    "hipaa authorization",
    "authorized release",
    "permission to share",
    "consented to share",
    "with their permission",
    "consent on file",
];

/// Whole-content gate: testimonial or patient-story content must carry an
/// explicit consent acknowledgment somewhere in the same content.
pub(crate) async fn check(content: &str) -> Vec<Violation> {
    let lowered = content.to_lowercase();
    let tells_story = STORY_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(indicator));
    if !tells_story {
        return Vec::new();
    }

    let acknowledged = CONSENT_ACKNOWLEDGMENTS
        .iter()
        .any(|phrase| lowered.contains(phrase));
    if acknowledged {
        return Vec::new();
    }

    vec![Violation::whole_content(
        policy::CONSENT,
        Severity::Medium,
        "Content shares a patient or client story without a consent acknowledgment",
        "Testimonials and patient stories require documented consent; add an acknowledgment such as \"shared with written consent\" or a HIPAA authorization reference.".to_string(),
    )]
}
