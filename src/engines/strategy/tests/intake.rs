use super::common::analysis_for;
use crate::engines::strategy::archetype::Archetype;
use crate::engines::strategy::intake::{analyze_intake, IntakeRequest};
use crate::engines::strategy::signals::{ClarityLevel, SignalKey};

#[test]
fn launch_text_selects_program_launch() {
    let analysis = analysis_for("We are launching a new program");
    assert_eq!(analysis.primary_archetype, Archetype::ProgramLaunch);
}

#[test]
fn referral_text_selects_referral_enablement() {
    let analysis = analysis_for("Provider referral enablement for physicians and care managers");
    assert_eq!(analysis.primary_archetype, Archetype::ReferralEnablement);
}

#[test]
fn awareness_text_falls_back_to_trust_building() {
    let analysis = analysis_for("Community awareness and stigma reduction outreach");
    assert_eq!(analysis.primary_archetype, Archetype::TrustBuilding);
    assert_eq!(analysis.secondary_archetype, None);
}

#[test]
fn compliance_reporting_text_selects_compliance_visibility() {
    let analysis = analysis_for(
        "Demonstrate compliance for annual report and performance dashboard for board",
    );
    assert_eq!(analysis.primary_archetype, Archetype::ComplianceVisibility);
}

#[test]
fn compliance_visibility_takes_priority_over_launch() {
    let analysis =
        analysis_for("Launching a new program; the board wants a performance dashboard too");
    assert_eq!(analysis.primary_archetype, Archetype::ComplianceVisibility);
    assert_eq!(analysis.secondary_archetype, Some(Archetype::ProgramLaunch));
}

#[test]
fn launch_with_referral_gets_referral_secondary() {
    let analysis = analysis_for("Launching a new program with referral outreach to physicians");
    assert_eq!(analysis.primary_archetype, Archetype::ProgramLaunch);
    assert_eq!(
        analysis.secondary_archetype,
        Some(Archetype::ReferralEnablement)
    );
}

#[test]
fn vague_audience_grades_low_clarity() {
    let analysis = analysis_for("We want to reach everyone in the community for general awareness");
    assert_eq!(analysis.stakeholders_clarity_level, ClarityLevel::Low);
}

#[test]
fn two_specific_audience_terms_grade_high_clarity() {
    let analysis = analysis_for("Campaign for referring physicians and primary care providers");
    assert_eq!(analysis.stakeholders_clarity_level, ClarityLevel::High);
}

#[test]
fn one_audience_term_grades_medium_clarity() {
    let analysis = analysis_for("A campaign aimed at veterans in our county");
    assert_eq!(analysis.stakeholders_clarity_level, ClarityLevel::Medium);
}

#[test]
fn confidence_rises_with_strong_signals_and_clarity() {
    let weak = analysis_for("general awareness campaign");
    let strong = analysis_for(
        "launching new program with compliance and referral enablement for providers",
    );
    assert!(weak.confidence_score < strong.confidence_score);
}

#[test]
fn confidence_stays_within_bounds() {
    let analysis = analysis_for(
        "launching a new program, referral outreach, compliance reporting, email newsletter, \
         social media, flyer handout for physicians and care managers",
    );
    assert!(analysis.confidence_score <= 100);
}

#[test]
fn detected_signals_carry_matched_terms_as_evidence() {
    let analysis = analysis_for("We are launching a new program with an email newsletter");
    let launch = analysis
        .signals
        .iter()
        .find(|signal| signal.key == SignalKey::Launch)
        .expect("launch signal present");
    assert!(launch.detected);
    assert!(launch.matched_terms.contains(&"launching".to_string()));

    let flyer = analysis
        .signals
        .iter()
        .find(|signal| signal.key == SignalKey::Flyer)
        .expect("flyer signal present");
    assert!(!flyer.detected);
    assert!(flyer.matched_terms.is_empty());
}

#[test]
fn compliance_flags_are_independent() {
    let both = analysis_for(
        "Demonstrate compliance for annual report; approval required before any send",
    );
    assert!(both.requires_visibility_archive);
    assert!(both.requires_approval_workflow);

    let neither = analysis_for("community awareness campaign about mental health support");
    assert!(!neither.requires_visibility_archive);
    assert!(!neither.requires_approval_workflow);

    let archive_only = analysis_for("Demonstrate compliance for the annual report");
    assert!(archive_only.requires_visibility_archive);
    assert!(!archive_only.requires_approval_workflow);
}

#[test]
fn low_clarity_forces_the_audience_question() {
    let analysis = analysis_for("We want to reach everyone with a new campaign");
    assert!(analysis
        .missing_info_questions
        .iter()
        .any(|question| question.id == "audience-definition"));
}

#[test]
fn questions_follow_detected_signals() {
    let analysis = analysis_for(
        "Launching a new program for referring physicians and primary care providers",
    );
    let ids: Vec<&str> = analysis
        .missing_info_questions
        .iter()
        .map(|question| question.id)
        .collect();
    assert!(ids.contains(&"launch-date"));
    assert!(ids.contains(&"referral-process"));
    assert!(
        !ids.contains(&"audience-definition"),
        "clarity is high, so the audience question is not forced"
    );
}

#[test]
fn secondary_archetype_appends_one_stack_addon() {
    let with_secondary =
        analysis_for("Launching a new program with referral outreach to physicians");
    let without_secondary = analysis_for("We are launching a new program");
    assert_eq!(
        with_secondary.recommended_stack.len(),
        without_secondary.recommended_stack.len() + 1
    );
    assert!(with_secondary
        .recommended_stack
        .last()
        .expect("stack not empty")
        .starts_with("Add-on:"));
}

#[test]
fn analysis_is_deterministic() {
    let request = IntakeRequest {
        intake_text: "Launching a new program with referral outreach".to_string(),
        ideas_text: Some("monthly newsletter".to_string()),
        industry: Some("behavioral health".to_string()),
        audience: Some("referring physicians".to_string()),
        goals: Some("grow referrals".to_string()),
    };
    assert_eq!(analyze_intake(&request), analyze_intake(&request));
}

#[test]
fn planner_prompt_keeps_fixed_section_order() {
    let analysis = analysis_for("Launching a new program for referring physicians");
    let prompt = &analysis.planner_prompt;

    let sections = [
        "MANDATORY CONSTRAINTS",
        "CONTEXT",
        "ENGINE ANALYSIS",
        "INTAKE NOTES",
        "UNRESOLVED GAPS",
        "DELIVERABLES CHECKLIST",
    ];
    let mut last = 0;
    for section in sections {
        let position = prompt
            .find(section)
            .unwrap_or_else(|| panic!("section {section} missing from planner prompt"));
        assert!(position >= last, "section {section} out of order");
        last = position;
    }
    assert!(prompt.contains("No urgency calls to action"));
    assert!(prompt.contains("No treatment outcome claims"));
}
