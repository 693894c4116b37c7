//! Curated static reference tables: cadence rules, the charter-safe
//! experiment library, the missing-information question bank, and the
//! per-archetype deliverable stacks.
//!
//! These are data, not logic; the guardrail invariants over them are
//! enforced by the strategy test suite.

use serde::Serialize;

use super::archetype::Archetype;
use super::signals::{signal_detected, ClarityLevel, Signal, SignalKey};

/// Fixed posting-frequency template keyed by primary archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CadenceRule {
    pub archetype: Archetype,
    pub pattern_name: &'static str,
    pub description: &'static str,
    pub rationale: &'static str,
    pub email_frequency: &'static str,
    pub social_frequency: &'static str,
}

const CADENCE_RULES: &[CadenceRule] = &[
    CadenceRule {
        archetype: Archetype::ProgramLaunch,
        pattern_name: "launch-surge",
        description: "Front-loaded announcement cadence that tapers to a sustaining rhythm after the opening month.",
        rationale: "Launches need concentrated visibility while the news is fresh, then a steady drumbeat to reach later deciders.",
        email_frequency: "weekly for the first 4 weeks, then biweekly",
        social_frequency: "3 posts per week for 4 weeks, then 2 per week",
    },
    CadenceRule {
        archetype: Archetype::TrustBuilding,
        pattern_name: "steady-presence",
        description: "Consistent low-pressure education cadence with no peaks.",
        rationale: "Trust accrues from reliable, useful presence, not bursts; spikes read as promotion.",
        email_frequency: "monthly newsletter",
        social_frequency: "2 posts per week",
    },
    CadenceRule {
        archetype: Archetype::ComplianceVisibility,
        pattern_name: "reporting-cycle",
        description: "Cadence aligned to reporting periods, with each touchpoint archived for oversight review.",
        rationale: "Stakeholder confidence comes from predictable, documented reporting rather than frequency.",
        email_frequency: "monthly stakeholder summary",
        social_frequency: "1 post per week",
    },
    CadenceRule {
        archetype: Archetype::ReferralEnablement,
        pattern_name: "provider-rhythm",
        description: "Low-volume professional cadence timed to provider workflows.",
        rationale: "Referring providers respond to concise, scannable updates; volume erodes attention.",
        email_frequency: "biweekly provider digest",
        social_frequency: "1 post per week",
    },
];

pub(crate) fn cadence_for(archetype: Archetype) -> CadenceRule {
    *CADENCE_RULES
        .iter()
        .find(|rule| rule.archetype == archetype)
        .unwrap_or(&CADENCE_RULES[1])
}

/// Variation class an experiment is limited to; none of these touch claims,
/// urgency, or individual stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyClass {
    Format,
    Framing,
    Sequencing,
}

/// Charter-safe A/B experiment template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experiment {
    pub id: &'static str,
    pub name: &'static str,
    pub hypothesis: &'static str,
    pub variant_a: &'static str,
    pub variant_b: &'static str,
    pub safety_class: SafetyClass,
    pub applicable_archetypes: &'static [Archetype],
}

const EXPERIMENT_LIBRARY: &[Experiment] = &[
    Experiment {
        id: "subject-line-framing",
        name: "Email subject line framing",
        hypothesis: "Question-framed subject lines earn more opens than statement-framed ones for education content.",
        variant_a: "Statement subject line describing the email topic",
        variant_b: "Question subject line posing the email topic",
        safety_class: SafetyClass::Framing,
        applicable_archetypes: &[
            Archetype::TrustBuilding,
            Archetype::ProgramLaunch,
            Archetype::ReferralEnablement,
        ],
    },
    Experiment {
        id: "provider-one-pager-format",
        name: "Provider one-pager format",
        hypothesis: "A checklist-format referral one-pager is retained and used more than a narrative version.",
        variant_a: "Narrative one-pager describing the referral pathway",
        variant_b: "Checklist one-pager with numbered referral steps",
        safety_class: SafetyClass::Format,
        applicable_archetypes: &[Archetype::ReferralEnablement],
    },
    Experiment {
        id: "announcement-order",
        name: "Launch announcement ordering",
        hypothesis: "Leading with who the program serves outperforms leading with program features.",
        variant_a: "Program details first, audience fit second",
        variant_b: "Audience fit first, program details second",
        safety_class: SafetyClass::Sequencing,
        applicable_archetypes: &[Archetype::ProgramLaunch],
    },
    Experiment {
        id: "social-post-format",
        name: "Social post format",
        hypothesis: "Carousel posts hold attention longer than single-image posts for psychoeducation topics.",
        variant_a: "Single image with caption",
        variant_b: "Multi-slide carousel covering the same points",
        safety_class: SafetyClass::Format,
        applicable_archetypes: &[Archetype::TrustBuilding, Archetype::ProgramLaunch],
    },
    Experiment {
        id: "faq-vs-overview",
        name: "FAQ versus overview section",
        hypothesis: "An FAQ-format program section answers reader objections better than a prose overview.",
        variant_a: "Prose overview of the program",
        variant_b: "FAQ-format section covering the same content",
        safety_class: SafetyClass::Format,
        applicable_archetypes: &[Archetype::ProgramLaunch, Archetype::TrustBuilding],
    },
    Experiment {
        id: "plain-language-framing",
        name: "Plain language versus clinical terminology",
        hypothesis: "Plain-language descriptions of services read as more approachable than clinical phrasing.",
        variant_a: "Clinical terminology with definitions",
        variant_b: "Plain-language description without jargon",
        safety_class: SafetyClass::Framing,
        applicable_archetypes: &[Archetype::TrustBuilding, Archetype::ComplianceVisibility],
    },
    Experiment {
        id: "referral-steps-placement",
        name: "Referral steps placement",
        hypothesis: "Placing referral steps at the top of a provider email increases referral starts versus bottom placement.",
        variant_a: "Referral steps after the program update",
        variant_b: "Referral steps before the program update",
        safety_class: SafetyClass::Sequencing,
        applicable_archetypes: &[Archetype::ReferralEnablement],
    },
    Experiment {
        id: "compliance-summary-format",
        name: "Compliance snapshot format",
        hypothesis: "A table-format compliance snapshot is easier for oversight readers to verify than narrative text.",
        variant_a: "Narrative compliance summary",
        variant_b: "Table-format compliance summary",
        safety_class: SafetyClass::Format,
        applicable_archetypes: &[Archetype::ComplianceVisibility],
    },
    Experiment {
        id: "newsletter-section-order",
        name: "Newsletter section ordering",
        hypothesis: "Opening with education content builds more repeat readership than opening with program updates.",
        variant_a: "Program updates first, education second",
        variant_b: "Education first, program updates second",
        safety_class: SafetyClass::Sequencing,
        applicable_archetypes: &[Archetype::TrustBuilding, Archetype::ComplianceVisibility],
    },
    Experiment {
        id: "cta-wording",
        name: "Call-to-action wording",
        hypothesis: "\"See how it works\" earns more clicks than \"Learn more\" for program pages.",
        variant_a: "\"Learn more\" call to action",
        variant_b: "\"See how it works\" call to action",
        safety_class: SafetyClass::Framing,
        applicable_archetypes: &[Archetype::ProgramLaunch, Archetype::ReferralEnablement],
    },
];

pub(crate) fn experiment_library() -> &'static [Experiment] {
    EXPERIMENT_LIBRARY
}

pub fn experiment_by_id(id: &str) -> Option<&'static Experiment> {
    EXPERIMENT_LIBRARY
        .iter()
        .find(|experiment| experiment.id == id)
}

/// Experiments whose applicable archetypes intersect the chosen primary or
/// secondary, capped at five.
pub(crate) fn experiments_for(
    primary: Archetype,
    secondary: Option<Archetype>,
) -> Vec<Experiment> {
    EXPERIMENT_LIBRARY
        .iter()
        .filter(|experiment| {
            experiment
                .applicable_archetypes
                .iter()
                .any(|archetype| *archetype == primary || Some(*archetype) == secondary)
        })
        .take(5)
        .copied()
        .collect()
}

/// Missing-information question, triggered by detected signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntakeQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub triggered_by: &'static [SignalKey],
}

/// Question forced into the result whenever audience clarity grades low,
/// independent of any signal.
const AUDIENCE_QUESTION: IntakeQuestion = IntakeQuestion {
    id: "audience-definition",
    question: "Who, specifically, is the primary audience for this campaign (role, setting, relationship to the program)?",
    triggered_by: &[],
};

const QUESTION_BANK: &[IntakeQuestion] = &[
    AUDIENCE_QUESTION,
    IntakeQuestion {
        id: "launch-date",
        question: "What is the launch date or target window, and are intake operations ready for it?",
        triggered_by: &[SignalKey::Launch],
    },
    IntakeQuestion {
        id: "launch-capacity",
        question: "What capacity or availability should launch messaging reflect?",
        triggered_by: &[SignalKey::Launch],
    },
    IntakeQuestion {
        id: "referral-process",
        question: "What does the referral process look like step by step, from provider decision to first appointment?",
        triggered_by: &[SignalKey::ReferralEnablement, SignalKey::IntegrationOfCare],
    },
    IntakeQuestion {
        id: "referral-contacts",
        question: "Which provider groups or organizations should receive enablement materials first?",
        triggered_by: &[SignalKey::ReferralEnablement],
    },
    IntakeQuestion {
        id: "compliance-reviewer",
        question: "Who reviews and approves content before it is published, and what is their turnaround time?",
        triggered_by: &[SignalKey::Compliance],
    },
    IntakeQuestion {
        id: "compliance-audience",
        question: "Which oversight body or stakeholder group is the compliance reporting intended for?",
        triggered_by: &[SignalKey::ComplianceVisibility],
    },
    IntakeQuestion {
        id: "social-platforms",
        question: "Which social platforms does the organization actively maintain, and who posts to them?",
        triggered_by: &[SignalKey::Social],
    },
    IntakeQuestion {
        id: "email-list",
        question: "Is there an existing email list, and how was consent to contact collected?",
        triggered_by: &[SignalKey::Email],
    },
    IntakeQuestion {
        id: "flyer-distribution",
        question: "Where will printed materials be distributed, and who manages those locations?",
        triggered_by: &[SignalKey::Flyer],
    },
];

/// Questions whose trigger signals were detected; the audience-definition
/// question is additionally forced whenever clarity is low.
pub(crate) fn questions_for(signals: &[Signal], clarity: ClarityLevel) -> Vec<IntakeQuestion> {
    let mut selected: Vec<IntakeQuestion> = QUESTION_BANK
        .iter()
        .filter(|question| {
            question
                .triggered_by
                .iter()
                .any(|key| signal_detected(signals, *key))
        })
        .copied()
        .collect();

    if clarity == ClarityLevel::Low
        && !selected
            .iter()
            .any(|question| question.id == AUDIENCE_QUESTION.id)
    {
        selected.insert(0, AUDIENCE_QUESTION);
    }
    selected
}

/// Ordered deliverable stack for a primary archetype.
pub(crate) fn stack_for(archetype: Archetype) -> Vec<&'static str> {
    match archetype {
        Archetype::ProgramLaunch => vec![
            "Launch announcement email",
            "Program overview landing page copy",
            "4-week social announcement series",
            "Program FAQ sheet",
        ],
        Archetype::TrustBuilding => vec![
            "Monthly education newsletter",
            "Community education social series",
            "Team introduction posts",
            "Psychoeducation article",
        ],
        Archetype::ComplianceVisibility => vec![
            "Compliance snapshot summary",
            "Stakeholder update email",
            "Board-ready program narrative",
            "Content archive checklist",
        ],
        Archetype::ReferralEnablement => vec![
            "Provider referral one-pager",
            "Referral process email for provider offices",
            "Warm-handoff talking points",
            "Provider FAQ",
        ],
    }
}

/// One add-on line appended to the stack when a secondary archetype exists.
pub(crate) fn secondary_stack_addon(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::ProgramLaunch => "Add-on: launch announcement adapted for the primary campaign's channels",
        Archetype::TrustBuilding => "Add-on: community education piece reinforcing the primary campaign",
        Archetype::ComplianceVisibility => "Add-on: archived compliance summary of the primary campaign",
        Archetype::ReferralEnablement => "Add-on: provider referral one-pager supporting the primary campaign",
    }
}

pub(crate) fn suggested_audience(archetype: Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::ProgramLaunch => &[
            "Prospective participants and their families",
            "Referring providers in the service area",
        ],
        Archetype::TrustBuilding => &[
            "Community members and families",
            "Local organizations and educators",
        ],
        Archetype::ComplianceVisibility => &[
            "Board members and oversight bodies",
            "Payers and accreditation reviewers",
        ],
        Archetype::ReferralEnablement => &[
            "Referring physicians and primary care practices",
            "Care managers and discharge planners",
        ],
    }
}

pub(crate) fn suggested_goals(archetype: Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::ProgramLaunch => &[
            "Make the service area aware the program exists and whom it serves",
            "Generate qualified inquiries during the launch window",
        ],
        Archetype::TrustBuilding => &[
            "Build recognition as a reliable source of behavioral-health education",
            "Reduce stigma-driven hesitation to reach out",
        ],
        Archetype::ComplianceVisibility => &[
            "Demonstrate a documented, reviewable marketing practice",
            "Keep oversight stakeholders informed on a predictable cycle",
        ],
        Archetype::ReferralEnablement => &[
            "Make referring easy and unambiguous for provider offices",
            "Grow the share of referrals arriving with complete information",
        ],
    }
}
