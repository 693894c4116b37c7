use serde::{Deserialize, Serialize};

/// Closed set of intake keyword categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalKey {
    Launch,
    Compliance,
    Social,
    Email,
    Flyer,
    IntegrationOfCare,
    ReferralEnablement,
    TrustBuilding,
    ComplianceVisibility,
}

impl SignalKey {
    pub const ALL: [SignalKey; 9] = [
        SignalKey::Launch,
        SignalKey::Compliance,
        SignalKey::Social,
        SignalKey::Email,
        SignalKey::Flyer,
        SignalKey::IntegrationOfCare,
        SignalKey::ReferralEnablement,
        SignalKey::TrustBuilding,
        SignalKey::ComplianceVisibility,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SignalKey::Launch => "launch",
            SignalKey::Compliance => "compliance",
            SignalKey::Social => "social",
            SignalKey::Email => "email",
            SignalKey::Flyer => "flyer",
            SignalKey::IntegrationOfCare => "integration-of-care",
            SignalKey::ReferralEnablement => "referral-enablement",
            SignalKey::TrustBuilding => "trust-building",
            SignalKey::ComplianceVisibility => "compliance-visibility",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            SignalKey::Launch => &[
                "launch",
                "launching",
                "new program",
                "grand opening",
                "now open",
                "introducing",
                "rollout",
                "kicking off",
                "opening soon",
            ],
            SignalKey::Compliance => &[
                "compliance",
                "hipaa",
                "regulatory",
                "regulation",
                "accreditation",
                "carf",
                "joint commission",
                "licensing",
                "42 cfr",
            ],
            SignalKey::Social => &[
                "social media",
                "instagram",
                "facebook",
                "linkedin",
                "social post",
                "reels",
                "social channels",
            ],
            SignalKey::Email => &[
                "email",
                "newsletter",
                "drip campaign",
                "e-blast",
                "mailing list",
                "inbox",
            ],
            SignalKey::Flyer => &[
                "flyer",
                "brochure",
                "one-pager",
                "handout",
                "rack card",
                "printed",
                "print materials",
            ],
            SignalKey::IntegrationOfCare => &[
                "integration of care",
                "integrated care",
                "care coordination",
                "whole-person",
                "collaborative care",
                "co-occurring",
            ],
            SignalKey::ReferralEnablement => &[
                "referral",
                "referring",
                "refer patients",
                "provider outreach",
                "physician",
                "care manager",
                "discharge planner",
                "warm handoff",
            ],
            SignalKey::TrustBuilding => &[
                "trust",
                "awareness",
                "community",
                "stigma",
                "education",
                "outreach",
                "reputation",
            ],
            SignalKey::ComplianceVisibility => &[
                "annual report",
                "board",
                "demonstrate compliance",
                "audit trail",
                "transparency report",
                "performance dashboard",
                "visibility",
            ],
        }
    }
}

/// One detected (or absent) signal with the literal substrings that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub key: SignalKey,
    pub detected: bool,
    pub matched_terms: Vec<String>,
}

/// Scans the combined, lowercased intake text for every signal category.
pub(crate) fn detect_signals(combined: &str) -> Vec<Signal> {
    SignalKey::ALL
        .iter()
        .map(|&key| {
            let matched_terms: Vec<String> = key
                .keywords()
                .iter()
                .filter(|keyword| combined.contains(*keyword))
                .map(|keyword| keyword.to_string())
                .collect();
            Signal {
                key,
                detected: !matched_terms.is_empty(),
                matched_terms,
            }
        })
        .collect()
}

pub(crate) fn signal_detected(signals: &[Signal], key: SignalKey) -> bool {
    signals
        .iter()
        .any(|signal| signal.key == key && signal.detected)
}

/// How precisely the intake names its audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClarityLevel {
    Low,
    Medium,
    High,
}

impl ClarityLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClarityLevel::Low => "low",
            ClarityLevel::Medium => "medium",
            ClarityLevel::High => "high",
        }
    }
}

/// Vocabulary of specific audience descriptors.
const AUDIENCE_TERMS: &[&str] = &[
    "physicians",
    "primary care",
    "providers",
    "therapists",
    "counselors",
    "case managers",
    "care managers",
    "discharge planners",
    "social workers",
    "nurses",
    "school counselors",
    "pediatricians",
    "parents",
    "families",
    "caregivers",
    "adolescents",
    "teens",
    "young adults",
    "older adults",
    "veterans",
    "employers",
    "hr leaders",
    "eap",
    "payers",
    "health plans",
    "clergy",
    "first responders",
    "referral partners",
];

/// Phrases that mark the audience as undefined regardless of other matches.
const VAGUE_AUDIENCE_PHRASES: &[&str] = &[
    "everyone",
    "anyone",
    "general public",
    "the community",
    "all audiences",
    "general awareness",
    "broad audience",
];

/// Grades audience clarity: a vague phrase forces `low`; otherwise the count
/// of distinct specific-audience terms decides.
pub(crate) fn grade_audience_clarity(combined: &str) -> (ClarityLevel, Vec<String>) {
    let matched: Vec<String> = AUDIENCE_TERMS
        .iter()
        .filter(|term| combined.contains(*term))
        .map(|term| term.to_string())
        .collect();

    let vague = VAGUE_AUDIENCE_PHRASES
        .iter()
        .any(|phrase| combined.contains(phrase));
    let level = if vague {
        ClarityLevel::Low
    } else {
        match matched.len() {
            0 => ClarityLevel::Low,
            1 => ClarityLevel::Medium,
            _ => ClarityLevel::High,
        }
    };
    (level, matched)
}

const STRONG_SIGNALS: [SignalKey; 3] = [
    SignalKey::Launch,
    SignalKey::ReferralEnablement,
    SignalKey::Compliance,
];

const SUPPORTING_SIGNALS: [SignalKey; 3] = [SignalKey::Social, SignalKey::Email, SignalKey::Flyer];

/// Base 50; +10 per strong signal, +5 per supporting signal, minus a clarity
/// penalty; clamped to 0..=100.
pub(crate) fn confidence_score(signals: &[Signal], clarity: ClarityLevel) -> u32 {
    let mut score: i32 = 50;
    for key in STRONG_SIGNALS {
        if signal_detected(signals, key) {
            score += 10;
        }
    }
    for key in SUPPORTING_SIGNALS {
        if signal_detected(signals, key) {
            score += 5;
        }
    }
    score += match clarity {
        ClarityLevel::Low => -10,
        ClarityLevel::Medium => -5,
        ClarityLevel::High => 0,
    };
    score.clamp(0, 100) as u32
}
