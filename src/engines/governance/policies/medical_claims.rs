use std::sync::LazyLock;

use regex::Regex;

use crate::engines::governance::domain::{policy, Severity, Violation};

/// Outcome-claim term that becomes a violation when it appears near
/// mental-health context language.
struct ClaimRule {
    term: &'static str,
    context: &'static str,
    alternative: &'static str,
    explanation: &'static str,
}

const CLAIM_RULES: &[ClaimRule] = &[
    ClaimRule {
        term: "cure",
        context: "treatment outcomes",
        alternative: "support",
        explanation: "Behavioral-health marketing may not claim to cure a condition; describe support instead.",
    },
    ClaimRule {
        term: "cures",
        context: "treatment outcomes",
        alternative: "supports",
        explanation: "Behavioral-health marketing may not claim to cure a condition; describe support instead.",
    },
    ClaimRule {
        term: "heal",
        context: "treatment outcomes",
        alternative: "help",
        explanation: "\"Heal\" implies a clinical outcome promise; use \"help\" or \"support\".",
    },
    ClaimRule {
        term: "heals",
        context: "treatment outcomes",
        alternative: "helps",
        explanation: "\"Heals\" implies a clinical outcome promise; use \"helps\" or \"supports\".",
    },
    ClaimRule {
        term: "fix",
        context: "symptom language",
        alternative: "address",
        explanation: "\"Fix\" frames a health condition as a defect with a guaranteed repair; use \"address\".",
    },
    ClaimRule {
        term: "fixes",
        context: "symptom language",
        alternative: "addresses",
        explanation: "\"Fixes\" frames a health condition as a defect with a guaranteed repair; use \"addresses\".",
    },
    ClaimRule {
        term: "eliminate",
        context: "symptom language",
        alternative: "reduce",
        explanation: "Claiming to eliminate symptoms is an unprovable outcome claim; use \"reduce\" or \"manage\".",
    },
    ClaimRule {
        term: "eliminates",
        context: "symptom language",
        alternative: "reduces",
        explanation: "Claiming to eliminate symptoms is an unprovable outcome claim; use \"reduces\" or \"manages\".",
    },
    ClaimRule {
        term: "reverse",
        context: "condition language",
        alternative: "manage",
        explanation: "Claiming to reverse a condition is a medical claim requiring substantiation; use \"manage\".",
    },
    ClaimRule {
        term: "permanent recovery",
        context: "recovery language",
        alternative: "lasting recovery support",
        explanation: "Recovery cannot be marketed as permanent; describe ongoing support instead.",
    },
    ClaimRule {
        term: "guaranteed results",
        context: "outcome language",
        alternative: "individualized care",
        explanation: "Results cannot be guaranteed in behavioral healthcare.",
    },
    ClaimRule {
        term: "best treatment",
        context: "comparative claims",
        alternative: "evidence-informed treatment",
        explanation: "Superlative treatment claims are unverifiable comparative medical claims.",
    },
    ClaimRule {
        term: "most effective",
        context: "comparative claims",
        alternative: "effective for many people",
        explanation: "Effectiveness superlatives are unverifiable comparative medical claims.",
    },
];

/// Mental-health context words that must appear within 50 characters after
/// the claim term for it to count as a medical claim.
const CONTEXT_TERMS: &str = "depression|anxiety|therapy|mental health|addiction|substance|trauma|ptsd|treatment|counseling|disorder|recovery";

static CLAIM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CLAIM_RULES
        .iter()
        .map(|rule| {
            let pattern = format!(
                r"(?is)\b{}\b.{{0,50}}\b(?:{})\b",
                regex::escape(rule.term),
                CONTEXT_TERMS
            );
            Regex::new(&pattern).expect("static claim pattern compiles")
        })
        .collect()
});

pub(crate) async fn check(content: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (rule, pattern) in CLAIM_RULES.iter().zip(CLAIM_PATTERNS.iter()) {
        for found in pattern.find_iter(content) {
            violations.push(Violation::at_match(
                policy::MEDICAL_CLAIMS,
                Severity::High,
                content,
                found.start(),
                found.end(),
                30,
                format!(
                    "{} ({}). Consider \"{}\" instead of \"{}\".",
                    rule.explanation, rule.context, rule.alternative, rule.term
                ),
            ));
        }
    }
    violations
}
