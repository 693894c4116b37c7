use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::archetype::Archetype;
use super::brief::CampaignBrief;
use super::guardrails::find_prohibited_phrase;

/// Compiled natural-language prompts for the external drafting process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftingPrompts {
    /// Two-week micro-sequence; always generated.
    pub prompt_a: String,
    /// Provider enablement kit; only for referral-enablement campaigns.
    pub prompt_b: Option<String>,
    /// Compliance visibility snapshot; only when archiving is required.
    pub prompt_c: Option<String>,
}

/// Raised when a compiled prompt contains a prohibited phrase. Prompts go to
/// an external drafting process, so this gate fails loudly instead of
/// degrading; no partially-built prompt set is returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftingPromptError {
    #[error("prohibited phrase \"{phrase}\" detected in {label}; prompt set rejected")]
    ProhibitedPhrase {
        label: &'static str,
        phrase: &'static str,
    },
}

/// Compiles one to three drafting prompts from a sanitized campaign brief.
pub fn generate_drafting_prompts(
    brief: &CampaignBrief,
    primary: Archetype,
    secondary: Option<Archetype>,
) -> Result<DraftingPrompts, DraftingPromptError> {
    let prompt_a = compile_micro_sequence(brief, primary);
    guard_prompt("prompt A (two-week micro-sequence)", &prompt_a)?;

    let referral_campaign = primary == Archetype::ReferralEnablement
        || secondary == Some(Archetype::ReferralEnablement);
    let prompt_b = if referral_campaign {
        let prompt = compile_provider_kit(brief);
        guard_prompt("prompt B (provider enablement kit)", &prompt)?;
        Some(prompt)
    } else {
        None
    };

    let prompt_c = if brief.compliance_notes.requires_visibility_archive {
        let prompt = compile_compliance_snapshot(brief);
        guard_prompt("prompt C (compliance visibility snapshot)", &prompt)?;
        Some(prompt)
    } else {
        None
    };

    Ok(DraftingPrompts {
        prompt_a,
        prompt_b,
        prompt_c,
    })
}

fn guard_prompt(label: &'static str, prompt: &str) -> Result<(), DraftingPromptError> {
    match find_prohibited_phrase(prompt) {
        Some(phrase) => Err(DraftingPromptError::ProhibitedPhrase { label, phrase }),
        None => Ok(()),
    }
}

fn write_shared_context(prompt: &mut String, brief: &CampaignBrief) {
    writeln!(prompt, "Program summary: {}", brief.program_summary).expect("write summary");
    writeln!(prompt, "Positioning: {}", brief.positioning_statement).expect("write positioning");
    writeln!(prompt, "Primary audience: {}", brief.primary_audience).expect("write audience");
    if !brief.messaging_pillars.is_empty() {
        writeln!(prompt, "Messaging pillars:").expect("write pillars header");
        for pillar in &brief.messaging_pillars {
            writeln!(
                prompt,
                "- {}: do {}; avoid {}",
                pillar.name,
                pillar.do_list.join("; "),
                pillar.avoid.join("; ")
            )
            .expect("write pillar");
        }
    }
    writeln!(
        prompt,
        "Hard rules: no outcome claims, no urgency language, no patient or client stories."
    )
    .expect("write hard rules");
}

fn compile_micro_sequence(brief: &CampaignBrief, primary: Archetype) -> String {
    let mut prompt = String::new();
    writeln!(
        prompt,
        "Draft a two-week content micro-sequence for a {} campaign.",
        primary.as_str()
    )
    .expect("write intent");
    write_shared_context(&mut prompt, brief);
    writeln!(
        prompt,
        "Channels: {}",
        if brief.channels.is_empty() {
            "email".to_string()
        } else {
            brief.channels.join(", ")
        }
    )
    .expect("write channels");
    if !brief.content_themes.is_empty() {
        writeln!(prompt, "Themes to draw from: {}", brief.content_themes.join("; "))
            .expect("write themes");
    }
    writeln!(
        prompt,
        "Produce a day-by-day plan with copy drafts for each piece."
    )
    .expect("write deliverable");
    prompt
}

fn compile_provider_kit(brief: &CampaignBrief) -> String {
    let mut prompt = String::new();
    writeln!(
        prompt,
        "Draft a provider enablement kit: a referral one-pager, a short cover email for provider offices, and warm-handoff talking points."
    )
    .expect("write intent");
    write_shared_context(&mut prompt, brief);
    writeln!(
        prompt,
        "Write for clinical readers: concise, scannable, and specific about referral steps and response times."
    )
    .expect("write register");
    prompt
}

fn compile_compliance_snapshot(brief: &CampaignBrief) -> String {
    let mut prompt = String::new();
    writeln!(
        prompt,
        "Draft a compliance visibility snapshot summarizing this campaign for oversight stakeholders."
    )
    .expect("write intent");
    write_shared_context(&mut prompt, brief);
    writeln!(
        prompt,
        "Include: what will be published, the review and approval steps applied, and how each piece is archived."
    )
    .expect("write contents");
    writeln!(
        prompt,
        "Keep the register factual and verifiable; no marketing gloss."
    )
    .expect("write register");
    prompt
}
