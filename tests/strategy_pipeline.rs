use care_outreach::engines::strategy::{
    analyze_intake, apply_field_locks, generate_campaign_brief, generate_drafting_prompts,
    Archetype, BriefInput, ClarityLevel, IntakeRequest,
};

fn intake(text: &str) -> IntakeRequest {
    IntakeRequest {
        intake_text: text.to_string(),
        ..IntakeRequest::default()
    }
}

#[test]
fn launch_intake_flows_through_brief_and_prompts() {
    let analysis = analyze_intake(&intake(
        "We are launching a new program and want referral outreach to physicians and care managers",
    ));
    assert_eq!(analysis.primary_archetype, Archetype::ProgramLaunch);
    assert_eq!(
        analysis.secondary_archetype,
        Some(Archetype::ReferralEnablement)
    );
    assert_eq!(analysis.stakeholders_clarity_level, ClarityLevel::High);
    assert!(!analysis.experiments.is_empty());
    assert!(analysis.experiments.len() <= 5);

    let brief = generate_campaign_brief(BriefInput {
        analysis: &analysis,
        channels: vec!["email".to_string(), "social".to_string()],
        assets: vec!["one-pager".to_string()],
        engine_version: "strategy-engine/1".to_string(),
        existing_version: None,
    });
    assert_eq!(brief.meta.brief_version, "1.0.0");
    assert!(brief.missing_info_questions.is_none());

    let prompts = generate_drafting_prompts(
        &brief,
        analysis.primary_archetype,
        analysis.secondary_archetype,
    )
    .expect("sanitized brief compiles cleanly");
    assert!(
        prompts.prompt_b.is_some(),
        "referral secondary triggers the provider kit"
    );
}

#[test]
fn compliance_intake_produces_an_archived_snapshot_prompt() {
    let analysis = analyze_intake(&intake(
        "Demonstrate compliance for the annual report and performance dashboard for the board; \
         approval required before any send",
    ));
    assert_eq!(
        analysis.primary_archetype,
        Archetype::ComplianceVisibility
    );
    assert!(analysis.requires_visibility_archive);
    assert!(analysis.requires_approval_workflow);

    let brief = generate_campaign_brief(BriefInput {
        analysis: &analysis,
        channels: vec!["email".to_string()],
        assets: Vec::new(),
        engine_version: "strategy-engine/1".to_string(),
        existing_version: None,
    });
    let prompts = generate_drafting_prompts(&brief, analysis.primary_archetype, None)
        .expect("sanitized brief compiles cleanly");
    assert!(prompts.prompt_c.is_some());
}

#[test]
fn vague_intake_regenerates_with_locked_summary() {
    let vague = analyze_intake(&intake(
        "We want to reach everyone in the community for general awareness",
    ));
    assert_eq!(vague.stakeholders_clarity_level, ClarityLevel::Low);

    let first = generate_campaign_brief(BriefInput {
        analysis: &vague,
        channels: vec!["social".to_string()],
        assets: Vec::new(),
        engine_version: "strategy-engine/1".to_string(),
        existing_version: None,
    });
    assert_eq!(first.primary_audience, "TBD");

    let clarified = analyze_intake(&intake(
        "Community education campaign for parents and school counselors",
    ));
    let second = generate_campaign_brief(BriefInput {
        analysis: &clarified,
        channels: vec!["email".to_string(), "print".to_string()],
        assets: Vec::new(),
        engine_version: "strategy-engine/1".to_string(),
        existing_version: Some(first.meta.brief_version.clone()),
    });
    assert_eq!(second.meta.brief_version, "1.0.1");
    assert_ne!(second.primary_audience, "TBD");

    let merged = apply_field_locks(second, &first, &["channels"]);
    assert_eq!(merged.channels, vec!["social".to_string()]);
    assert_eq!(merged.meta.brief_version, "1.0.1");
}

#[test]
fn analysis_and_brief_serialize_for_storage() {
    let analysis = analyze_intake(&intake(
        "Launching a new program; email newsletter outreach to referral partners",
    ));
    let value = serde_json::to_value(&analysis).expect("analysis serializes");
    assert_eq!(value["primary_archetype"], "program-launch");
    assert_eq!(value["stakeholders_clarity_level"], "medium");

    let brief = generate_campaign_brief(BriefInput {
        analysis: &analysis,
        channels: vec!["email".to_string()],
        assets: Vec::new(),
        engine_version: "strategy-engine/1".to_string(),
        existing_version: None,
    });
    let json = serde_json::to_string(&brief).expect("brief serializes");
    let restored: care_outreach::engines::strategy::CampaignBrief =
        serde_json::from_str(&json).expect("brief deserializes");
    assert_eq!(restored, brief);
}
