use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{policy, Violation};

/// How a policy's penalty responds to repeat violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PenaltyMode {
    /// Fixed weight regardless of violation count within the policy.
    Single,
    /// Per-violation weight, capped at `max_penalty`.
    Additive,
}

struct PolicyWeight {
    policy_id: &'static str,
    penalty: u32,
    max_penalty: u32,
    mode: PenaltyMode,
    description: &'static str,
}

/// Canonical scoring order (weight descending). Reasoning lines and the
/// passed list both follow it so audit output is reproducible run to run.
const WEIGHT_TABLE: &[PolicyWeight] = &[
    PolicyWeight {
        policy_id: policy::SUICIDE_SAFETY,
        penalty: 30,
        max_penalty: 30,
        mode: PenaltyMode::Single,
        description: "Suicide/self-harm content without crisis resources",
    },
    PolicyWeight {
        policy_id: policy::MEDICAL_CLAIMS,
        penalty: 25,
        max_penalty: 25,
        mode: PenaltyMode::Single,
        description: "Unsubstantiated medical claims",
    },
    PolicyWeight {
        policy_id: policy::TREATMENT_QUALIFICATION,
        penalty: 20,
        max_penalty: 20,
        mode: PenaltyMode::Single,
        description: "Unqualified absolute treatment claims",
    },
    PolicyWeight {
        policy_id: policy::DSM5_TERMINOLOGY,
        penalty: 15,
        max_penalty: 15,
        mode: PenaltyMode::Single,
        description: "Nonstandard diagnostic terminology",
    },
    PolicyWeight {
        policy_id: policy::CONSENT,
        penalty: 10,
        max_penalty: 10,
        mode: PenaltyMode::Single,
        description: "Patient story without consent acknowledgment",
    },
    PolicyWeight {
        policy_id: policy::STIGMA_LANGUAGE,
        penalty: 5,
        max_penalty: 30,
        mode: PenaltyMode::Additive,
        description: "Stigmatizing language",
    },
    PolicyWeight {
        policy_id: policy::CUSTOM_PATTERNS,
        penalty: 8,
        max_penalty: 32,
        mode: PenaltyMode::Additive,
        description: "Organization custom pattern matches",
    },
    PolicyWeight {
        policy_id: policy::REQUIRED_PHRASES,
        penalty: 10,
        max_penalty: 30,
        mode: PenaltyMode::Additive,
        description: "Missing required phrases",
    },
];

/// Aggregate 0-100 compliance result with an itemized audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub score: u32,
    /// One human-readable penalty line per violated policy, in canonical
    /// policy order.
    pub reasoning: Vec<String>,
    /// Policy ids from the weight table with zero violations.
    pub passed: Vec<String>,
    /// The full input set, retained for the audit trail.
    pub violations: Vec<Violation>,
}

impl ComplianceScore {
    /// Compact one-line rendering for notification layers.
    pub fn summary(&self) -> String {
        if self.violations.is_empty() {
            return format!("Compliance score {}/100; no policy violations found.", self.score);
        }
        format!(
            "Compliance score {}/100; {} violation(s) across {} policy area(s): {}",
            self.score,
            self.violations.len(),
            self.reasoning.len(),
            self.reasoning.join("; ")
        )
    }
}

/// Converts a violation set into a clamped 0-100 score.
///
/// Violations carrying a policy id absent from the weight table contribute
/// no penalty; new policy ids may appear in stored data before the weight
/// table learns about them.
pub fn score_violations(violations: &[Violation]) -> ComplianceScore {
    if violations.is_empty() {
        return ComplianceScore {
            score: 100,
            reasoning: vec!["No policy violations found".to_string()],
            passed: WEIGHT_TABLE
                .iter()
                .map(|weight| weight.policy_id.to_string())
                .collect(),
            violations: Vec::new(),
        };
    }

    for violation in violations {
        let known = WEIGHT_TABLE
            .iter()
            .any(|weight| weight.policy_id == violation.policy_id);
        if !known {
            warn!(policy_id = %violation.policy_id, "no scoring weight for policy id; applying no penalty");
        }
    }

    let mut total_penalty: u32 = 0;
    let mut reasoning = Vec::new();
    let mut passed = Vec::new();

    for weight in WEIGHT_TABLE {
        let count = violations
            .iter()
            .filter(|violation| violation.policy_id == weight.policy_id)
            .count() as u32;
        if count == 0 {
            passed.push(weight.policy_id.to_string());
            continue;
        }

        let penalty = match weight.mode {
            PenaltyMode::Single => weight.penalty,
            PenaltyMode::Additive => (count * weight.penalty).min(weight.max_penalty),
        };
        total_penalty += penalty;
        reasoning.push(format!(
            "{} ({}): {} violation(s), -{} points",
            weight.description, weight.policy_id, count, penalty
        ));
    }

    ComplianceScore {
        score: 100u32.saturating_sub(total_penalty),
        reasoning,
        passed,
        violations: violations.to_vec(),
    }
}
