use std::sync::LazyLock;

use regex::Regex;

use crate::engines::governance::domain::{policy, Severity, Violation};

/// Unqualified absolute treatment claim and its qualified replacement.
struct QualificationRule {
    term: &'static str,
    qualified: &'static str,
    explanation: &'static str,
}

const QUALIFICATION_RULES: &[QualificationRule] = &[
    QualificationRule {
        term: "will cure",
        qualified: "may help manage",
        explanation: "No treatment can promise a cure.",
    },
    QualificationRule {
        term: "guarantees recovery",
        qualified: "supports recovery",
        explanation: "Recovery cannot be guaranteed.",
    },
    QualificationRule {
        term: "always works",
        qualified: "works for many people",
        explanation: "No treatment works for everyone.",
    },
    QualificationRule {
        term: "completely eliminates",
        qualified: "may reduce",
        explanation: "Symptom elimination cannot be promised.",
    },
    QualificationRule {
        term: "permanent solution",
        qualified: "long-term support",
        explanation: "Behavioral-health care is ongoing, not a permanent fix.",
    },
    QualificationRule {
        term: "never fails",
        qualified: "has helped many people",
        explanation: "Failure-free treatment claims are unverifiable.",
    },
    QualificationRule {
        term: "100% effective",
        qualified: "effective for many people",
        explanation: "Absolute effectiveness rates cannot be substantiated.",
    },
    QualificationRule {
        term: "instant relief",
        qualified: "relief over time",
        explanation: "Immediate-results claims misrepresent behavioral-health treatment.",
    },
    QualificationRule {
        term: "guaranteed results",
        qualified: "individual results vary",
        explanation: "Results cannot be guaranteed.",
    },
    QualificationRule {
        term: "proven to cure",
        qualified: "shown to help",
        explanation: "Cure claims require substantiation no behavioral-health service can provide.",
    },
];

static QUALIFICATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    QUALIFICATION_RULES
        .iter()
        .map(|rule| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(rule.term)))
                .expect("static qualification pattern compiles")
        })
        .collect()
});

pub(crate) async fn check(content: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (rule, pattern) in QUALIFICATION_RULES.iter().zip(QUALIFICATION_PATTERNS.iter()) {
        for found in pattern.find_iter(content) {
            violations.push(Violation::at_match(
                policy::TREATMENT_QUALIFICATION,
                Severity::High,
                content,
                found.start(),
                found.end(),
                20,
                format!(
                    "{} Replace \"{}\" with \"{}\".",
                    rule.explanation, rule.term, rule.qualified
                ),
            ));
        }
    }
    violations
}
