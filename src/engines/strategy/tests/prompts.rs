use super::common::{analysis_for, brief_for};
use crate::engines::strategy::archetype::Archetype;
use crate::engines::strategy::prompts::{generate_drafting_prompts, DraftingPromptError};

#[test]
fn micro_sequence_prompt_is_always_generated() {
    let analysis = analysis_for("We are launching a new program");
    let brief = brief_for(&analysis);

    let prompts = generate_drafting_prompts(&brief, analysis.primary_archetype, None)
        .expect("clean brief compiles");
    assert!(prompts.prompt_a.contains("two-week"));
    assert!(prompts.prompt_b.is_none());
    assert!(prompts.prompt_c.is_none());
}

#[test]
fn provider_kit_requires_a_referral_archetype() {
    let analysis = analysis_for("Referral enablement for physicians and care managers");
    let brief = brief_for(&analysis);

    let prompts = generate_drafting_prompts(&brief, Archetype::ReferralEnablement, None)
        .expect("clean brief compiles");
    assert!(prompts.prompt_b.is_some());

    let secondary = generate_drafting_prompts(
        &brief,
        Archetype::ProgramLaunch,
        Some(Archetype::ReferralEnablement),
    )
    .expect("clean brief compiles");
    assert!(
        secondary.prompt_b.is_some(),
        "secondary referral archetype also triggers the kit"
    );
}

#[test]
fn compliance_snapshot_follows_the_archive_flag() {
    let analysis = analysis_for("Demonstrate compliance for the annual report to the board");
    let brief = brief_for(&analysis);
    assert!(brief.compliance_notes.requires_visibility_archive);

    let prompts = generate_drafting_prompts(&brief, analysis.primary_archetype, None)
        .expect("clean brief compiles");
    assert!(prompts.prompt_c.is_some());
}

#[test]
fn prohibited_phrase_in_a_brief_field_fails_the_gate() {
    let analysis = analysis_for("We are launching a new program");
    let mut brief = brief_for(&analysis);
    // Simulate a defect upstream of the sanitizer.
    brief.program_summary = "This program will cure everything.".to_string();

    let error = generate_drafting_prompts(&brief, analysis.primary_archetype, None)
        .expect_err("gate must reject the prompt set");
    match error {
        DraftingPromptError::ProhibitedPhrase { label, phrase } => {
            assert!(label.contains("prompt A"));
            assert_eq!(phrase, "will cure");
        }
    }
}

#[test]
fn prompts_embed_the_sanitized_brief_context() {
    let analysis = analysis_for("Referral enablement for physicians");
    let brief = brief_for(&analysis);

    let prompts = generate_drafting_prompts(&brief, Archetype::ReferralEnablement, None)
        .expect("clean brief compiles");
    assert!(prompts.prompt_a.contains(&brief.program_summary));
    assert!(prompts
        .prompt_a
        .contains("no outcome claims, no urgency language"));
}
