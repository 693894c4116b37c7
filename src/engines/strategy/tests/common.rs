use crate::engines::strategy::brief::{generate_campaign_brief, BriefInput, CampaignBrief};
use crate::engines::strategy::intake::{analyze_intake, IntakeAnalysis, IntakeRequest};

pub(super) fn analysis_for(intake_text: &str) -> IntakeAnalysis {
    analyze_intake(&IntakeRequest {
        intake_text: intake_text.to_string(),
        ..IntakeRequest::default()
    })
}

pub(super) fn brief_for(analysis: &IntakeAnalysis) -> CampaignBrief {
    generate_campaign_brief(BriefInput {
        analysis,
        channels: vec!["email".to_string(), "social".to_string()],
        assets: vec!["logo".to_string()],
        engine_version: "test-engine".to_string(),
        existing_version: None,
    })
}
