use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::archetype::Archetype;
use super::guardrails::{find_banned_outcome_term, sanitize_field};
use super::intake::IntakeAnalysis;
use super::signals::{signal_detected, ClarityLevel, SignalKey};

/// One messaging pillar: what to lean into and what to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingPillar {
    pub name: String,
    #[serde(rename = "do")]
    pub do_list: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceNotes {
    pub requires_visibility_archive: bool,
    pub requires_approval_workflow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefMeta {
    /// `major.minor.patch`; patch increments on regeneration.
    pub brief_version: String,
    pub engine_version: String,
    pub generated_at: DateTime<Utc>,
}

/// Structured campaign plan derived from an intake analysis. Every free-text
/// field has passed the prohibited-language sanitizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignBrief {
    pub program_summary: String,
    pub positioning_statement: String,
    pub primary_audience: String,
    pub messaging_pillars: Vec<MessagingPillar>,
    pub content_themes: Vec<String>,
    pub success_signals: Vec<String>,
    pub channels: Vec<String>,
    pub assets: Vec<String>,
    /// Populated only when audience clarity graded low; `None` otherwise.
    pub missing_info_questions: Option<Vec<String>>,
    pub compliance_notes: ComplianceNotes,
    pub meta: BriefMeta,
}

/// Caller-chosen inputs accompanying the analysis.
#[derive(Debug, Clone)]
pub struct BriefInput<'a> {
    pub analysis: &'a IntakeAnalysis,
    pub channels: Vec<String>,
    pub assets: Vec<String>,
    pub engine_version: String,
    pub existing_version: Option<String>,
}

const SUMMARY_FALLBACK: &str =
    "A behavioral-health marketing campaign focused on clear, supportive information about available services.";
const POSITIONING_FALLBACK: &str =
    "We provide supportive, evidence-informed behavioral-health care and communicate about it plainly and honestly.";
const THEME_FALLBACK: &str = "Plain-language information about services and how to get started";
const PILLAR_LINE_FALLBACK: &str = "Describe services plainly and without pressure";

/// Generates a campaign brief from an intake analysis, sanitizing every
/// derived text field at construction time.
pub fn generate_campaign_brief(input: BriefInput<'_>) -> CampaignBrief {
    let analysis = input.analysis;
    let primary = analysis.primary_archetype;

    let program_summary = sanitize_field(&build_program_summary(analysis), SUMMARY_FALLBACK);
    let positioning_statement =
        sanitize_field(positioning_for(primary), POSITIONING_FALLBACK);

    let messaging_pillars = pillars_for(primary)
        .into_iter()
        .map(|pillar| MessagingPillar {
            name: pillar.name.to_string(),
            do_list: pillar
                .do_list
                .iter()
                .map(|line| sanitize_field(line, PILLAR_LINE_FALLBACK))
                .collect(),
            avoid: pillar
                .avoid
                .iter()
                .map(|line| sanitize_field(line, PILLAR_LINE_FALLBACK))
                .collect(),
        })
        .collect();

    let content_themes = themes_for(primary)
        .iter()
        .map(|theme| sanitize_field(theme, THEME_FALLBACK))
        .collect();

    // Success signals also drop any line naming a clinical outcome term.
    let success_signals = success_signals_for(primary)
        .iter()
        .map(|line| sanitize_field(line, PILLAR_LINE_FALLBACK))
        .filter(|line| find_banned_outcome_term(line).is_none())
        .collect();

    let (primary_audience, missing_info_questions) = resolve_primary_audience(analysis);

    CampaignBrief {
        program_summary,
        positioning_statement,
        primary_audience,
        messaging_pillars,
        content_themes,
        success_signals,
        channels: input.channels,
        assets: input.assets,
        missing_info_questions,
        compliance_notes: ComplianceNotes {
            requires_visibility_archive: analysis.requires_visibility_archive,
            requires_approval_workflow: analysis.requires_approval_workflow,
        },
        meta: BriefMeta {
            brief_version: next_version(input.existing_version.as_deref()),
            engine_version: input.engine_version,
            generated_at: Utc::now(),
        },
    }
}

/// Audience resolution: fixed signal-priority mapping, overridden to "TBD"
/// (plus the clarity-driving questions) when the audience graded low.
fn resolve_primary_audience(analysis: &IntakeAnalysis) -> (String, Option<Vec<String>>) {
    if analysis.stakeholders_clarity_level == ClarityLevel::Low {
        let questions: Vec<String> = analysis
            .missing_info_questions
            .iter()
            .map(|question| question.question.to_string())
            .collect();
        return ("TBD".to_string(), Some(questions));
    }

    let audience = if signal_detected(&analysis.signals, SignalKey::ReferralEnablement) {
        "Referring providers and care teams in the service area"
    } else if signal_detected(&analysis.signals, SignalKey::Launch) {
        "Prospective participants and the professionals who guide them"
    } else if signal_detected(&analysis.signals, SignalKey::TrustBuilding) {
        "Community members and families considering behavioral-health support"
    } else if signal_detected(&analysis.signals, SignalKey::ComplianceVisibility) {
        "Oversight stakeholders and board members"
    } else {
        "Community members and families considering behavioral-health support"
    };
    (audience.to_string(), None)
}

fn build_program_summary(analysis: &IntakeAnalysis) -> String {
    let mut summary = format!(
        "A {} campaign built around a {} cadence.",
        analysis.primary_archetype.as_str(),
        analysis.cadence.pattern_name
    );
    if let Some(secondary) = analysis.secondary_archetype {
        summary.push_str(&format!(
            " A supporting {} thread reinforces the primary effort.",
            secondary.as_str()
        ));
    }
    summary.push_str(&format!(
        " Goals: {}.",
        analysis.suggested_goals.join("; ")
    ));
    summary
}

fn positioning_for(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::ProgramLaunch => {
            "A new program is open and accepting participants; we explain plainly who it serves, what it offers, and how to begin."
        }
        Archetype::TrustBuilding => {
            "We are a steady, credible source of behavioral-health information that people can approach without pressure."
        }
        Archetype::ComplianceVisibility => {
            "Our marketing practice is documented, reviewed, and open to oversight at any time."
        }
        Archetype::ReferralEnablement => {
            "Referring to us is simple, fast, and respectful of the provider's time and the patient's privacy."
        }
    }
}

struct PillarTemplate {
    name: &'static str,
    do_list: &'static [&'static str],
    avoid: &'static [&'static str],
}

fn pillars_for(archetype: Archetype) -> Vec<PillarTemplate> {
    match archetype {
        Archetype::ProgramLaunch => vec![
            PillarTemplate {
                name: "Clarity about the offer",
                do_list: &[
                    "Say who the program serves, what it includes, and how to start",
                    "Name insurance and access details up front",
                ],
                avoid: &[
                    "Outcome promises or effectiveness statistics",
                    "Countdown or scarcity framing around the launch",
                ],
            },
            PillarTemplate {
                name: "Low-pressure invitation",
                do_list: &[
                    "Offer a clear, optional next step for people who are ready",
                    "Acknowledge that deciding to seek care takes time",
                ],
                avoid: &["Urgency language of any kind", "Implying limited availability"],
            },
        ],
        Archetype::TrustBuilding => vec![
            PillarTemplate {
                name: "Useful education",
                do_list: &[
                    "Teach one concrete, usable thing per piece",
                    "Cite reputable public sources where relevant",
                ],
                avoid: &[
                    "Diagnostic language aimed at readers",
                    "Fear-based framing of symptoms",
                ],
            },
            PillarTemplate {
                name: "Approachability",
                do_list: &[
                    "Use plain words for clinical concepts",
                    "Show the humans and settings behind the organization",
                ],
                avoid: &["Jargon without explanation", "Stock-photo perfection that reads as distant"],
            },
        ],
        Archetype::ComplianceVisibility => vec![
            PillarTemplate {
                name: "Documented practice",
                do_list: &[
                    "Describe review and approval steps factually",
                    "Keep every published piece archived and traceable",
                ],
                avoid: &["Claims of perfection", "Minimizing past findings"],
            },
            PillarTemplate {
                name: "Stakeholder respect",
                do_list: &[
                    "Lead with what oversight readers need to verify",
                    "Keep summaries scannable and sourced",
                ],
                avoid: &["Marketing gloss in reporting materials"],
            },
        ],
        Archetype::ReferralEnablement => vec![
            PillarTemplate {
                name: "Frictionless referral",
                do_list: &[
                    "Spell out the referral steps and expected response time",
                    "Give providers a single, reliable point of contact",
                ],
                avoid: &[
                    "Vague \"contact us\" instructions",
                    "Overstating capacity or availability",
                ],
            },
            PillarTemplate {
                name: "Professional reciprocity",
                do_list: &[
                    "Close the loop with referring providers where consent allows",
                    "Respect the provider's clinical judgment in all materials",
                ],
                avoid: &["Implying the referrer's care was insufficient"],
            },
        ],
    }
}

fn themes_for(archetype: Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::ProgramLaunch => &[
            "What the new program offers and who it serves",
            "How to take the first step",
            "Meet the team behind the program",
        ],
        Archetype::TrustBuilding => &[
            "Understanding common behavioral-health experiences",
            "What to expect from care",
            "Community resources and how to use them",
        ],
        Archetype::ComplianceVisibility => &[
            "How our content review process works",
            "Program milestones, documented",
            "Reporting-period summaries for stakeholders",
        ],
        Archetype::ReferralEnablement => &[
            "The referral pathway, step by step",
            "What happens after a referral arrives",
            "Which presentations fit the program",
        ],
    }
}

fn success_signals_for(archetype: Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::ProgramLaunch => &[
            "Qualified inquiries during the launch window",
            "Landing page visits from announcement sends",
            "Email open and click-through trends across the sequence",
        ],
        Archetype::TrustBuilding => &[
            "Newsletter list growth and retention",
            "Repeat engagement on education content",
            "Inbound questions referencing published material",
        ],
        Archetype::ComplianceVisibility => &[
            "On-time delivery of every reporting-period summary",
            "Share of published content with a complete archive record",
            "Stakeholder acknowledgment of updates",
        ],
        Archetype::ReferralEnablement => &[
            "Referral submissions from targeted provider offices",
            "Share of referrals arriving with complete information",
            "Provider requests for additional materials",
        ],
    }
}

/// Patch-bumps a `major.minor.patch` version; anything unparsable resets to
/// `1.0.0`.
pub(crate) fn next_version(existing: Option<&str>) -> String {
    let Some(existing) = existing else {
        return "1.0.0".to_string();
    };
    let parts: Vec<&str> = existing.trim().split('.').collect();
    if parts.len() != 3 {
        return "1.0.0".to_string();
    }
    match (
        parts[0].parse::<u32>(),
        parts[1].parse::<u32>(),
        parts[2].parse::<u32>(),
    ) {
        (Ok(major), Ok(minor), Ok(patch)) => format!("{major}.{minor}.{}", patch + 1),
        _ => "1.0.0".to_string(),
    }
}

/// Per-field overwrite merge for callers that lock fields across
/// regeneration: locked fields keep their previous value verbatim, all
/// others take the fresh value. Unknown lock names are ignored with a
/// warning. Metadata always comes from the fresh brief.
pub fn apply_field_locks(
    mut fresh: CampaignBrief,
    previous: &CampaignBrief,
    locked_fields: &[&str],
) -> CampaignBrief {
    for field in locked_fields {
        match *field {
            "program_summary" => fresh.program_summary = previous.program_summary.clone(),
            "positioning_statement" => {
                fresh.positioning_statement = previous.positioning_statement.clone()
            }
            "primary_audience" => fresh.primary_audience = previous.primary_audience.clone(),
            "messaging_pillars" => fresh.messaging_pillars = previous.messaging_pillars.clone(),
            "content_themes" => fresh.content_themes = previous.content_themes.clone(),
            "success_signals" => fresh.success_signals = previous.success_signals.clone(),
            "channels" => fresh.channels = previous.channels.clone(),
            "assets" => fresh.assets = previous.assets.clone(),
            unknown => {
                warn!(field = %unknown, "ignoring unknown locked field name");
            }
        }
    }
    fresh
}
