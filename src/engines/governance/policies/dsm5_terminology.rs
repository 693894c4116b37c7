use std::sync::LazyLock;

use regex::Regex;

use crate::engines::governance::domain::{policy, Severity, Violation};

/// Diagnosis-style phrasing worth checking against standard terminology.
static DIAGNOSIS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:diagnosed with|has|suffering from|living with)\s+([a-z\s]+(?:disorder|condition|syndrome))")
        .expect("static diagnosis pattern compiles")
});

/// Recognized DSM-5 diagnostic terms (space-normalized). The check is an
/// allow-list inverse: captured phrases containing none of these are flagged
/// as possibly nonstandard. Flags are advisory, not blocking.
const APPROVED_TERMS: &[&str] = &[
    "major depressive disorder",
    "persistent depressive disorder",
    "disruptive mood dysregulation disorder",
    "premenstrual dysphoric disorder",
    "bipolar i disorder",
    "bipolar ii disorder",
    "bipolar disorder",
    "cyclothymic disorder",
    "generalized anxiety disorder",
    "social anxiety disorder",
    "panic disorder",
    "separation anxiety disorder",
    "obsessive compulsive disorder",
    "compulsive disorder",
    "body dysmorphic disorder",
    "hoarding disorder",
    "posttraumatic stress disorder",
    "post traumatic stress disorder",
    "acute stress disorder",
    "adjustment disorder",
    "reactive attachment disorder",
    "disinhibited social engagement disorder",
    "dissociative identity disorder",
    "depersonalization derealization disorder",
    "somatic symptom disorder",
    "illness anxiety disorder",
    "conversion disorder",
    "factitious disorder",
    "binge eating disorder",
    "avoidant restrictive food intake disorder",
    "rumination disorder",
    "eating disorder",
    "insomnia disorder",
    "hypersomnolence disorder",
    "restless legs syndrome",
    "nightmare disorder",
    "rem sleep behavior disorder",
    "circadian rhythm sleep wake disorder",
    "oppositional defiant disorder",
    "intermittent explosive disorder",
    "conduct disorder",
    "antisocial personality disorder",
    "borderline personality disorder",
    "narcissistic personality disorder",
    "histrionic personality disorder",
    "avoidant personality disorder",
    "dependent personality disorder",
    "obsessive compulsive personality disorder",
    "paranoid personality disorder",
    "schizoid personality disorder",
    "schizotypal personality disorder",
    "personality disorder",
    "substance use disorder",
    "alcohol use disorder",
    "opioid use disorder",
    "stimulant use disorder",
    "cannabis use disorder",
    "tobacco use disorder",
    "gambling disorder",
    "attention deficit hyperactivity disorder",
    "autism spectrum disorder",
    "specific learning disorder",
    "language disorder",
    "tourette syndrome",
    "schizoaffective disorder",
    "delusional disorder",
    "schizophreniform disorder",
    "brief psychotic disorder",
    "major neurocognitive disorder",
    "mild neurocognitive disorder",
    "mental health condition",
    "behavioral health condition",
];

pub(crate) async fn check(content: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    for captures in DIAGNOSIS_PATTERN.captures_iter(content) {
        let Some(phrase) = captures.get(1) else {
            continue;
        };
        let normalized = phrase.as_str().to_lowercase();
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
        let recognized = APPROVED_TERMS
            .iter()
            .any(|approved| normalized.contains(approved));
        if recognized {
            continue;
        }

        let span = captures.get(0).map(|m| (m.start(), m.end()));
        let Some((byte_start, byte_end)) = span else {
            continue;
        };
        violations.push(Violation::at_match(
            policy::DSM5_TERMINOLOGY,
            Severity::Medium,
            content,
            byte_start,
            byte_end,
            20,
            format!(
                "\"{}\" does not match standard DSM-5 terminology; verify the diagnosis name or describe experiences without a diagnostic label.",
                normalized
            ),
        ));
    }
    violations
}
