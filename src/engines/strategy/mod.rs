//! Strategy intake: deterministic signal detection, archetype selection,
//! cadence and experiment recommendation, brief generation, and drafting
//! prompt compilation, all behind hard content-safety guardrails.

pub mod archetype;
pub(crate) mod brief;
pub mod guardrails;
pub(crate) mod intake;
pub mod library;
pub(crate) mod prompts;
pub mod signals;

#[cfg(test)]
mod tests;

pub use archetype::Archetype;
pub use brief::{
    apply_field_locks, generate_campaign_brief, BriefInput, BriefMeta, CampaignBrief,
    ComplianceNotes, MessagingPillar,
};
pub use intake::{analyze_intake, IntakeAnalysis, IntakeRequest};
pub use library::{experiment_by_id, CadenceRule, Experiment, IntakeQuestion, SafetyClass};
pub use prompts::{generate_drafting_prompts, DraftingPromptError, DraftingPrompts};
pub use signals::{ClarityLevel, Signal, SignalKey};
