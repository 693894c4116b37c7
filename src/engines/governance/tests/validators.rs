use crate::engines::governance::domain::{policy, Severity};
use crate::engines::governance::policies;

#[tokio::test]
async fn medical_claim_requires_nearby_context() {
    let flagged = policies::medical_claims::check("Our program can cure your depression for good.")
        .await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].policy_id, policy::MEDICAL_CLAIMS);
    assert_eq!(flagged[0].severity, Severity::High);
    assert!(flagged[0].start_index > 0 || flagged[0].end_index > 0);

    let clean = policies::medical_claims::check("We cure boredom with board games.").await;
    assert!(clean.is_empty(), "no mental-health context within range");
}

#[tokio::test]
async fn medical_claim_context_window_is_fifty_chars() {
    let near = "cure, within a short distance of the word therapy";
    assert_eq!(policies::medical_claims::check(near).await.len(), 1);

    let far = format!("cure {} therapy", "x".repeat(80));
    assert!(policies::medical_claims::check(&far).await.is_empty());
}

#[tokio::test]
async fn stigma_terms_flagged_unconditionally() {
    let flagged =
        policies::stigma_language::check("Support for every addict in our community.").await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].policy_id, policy::STIGMA_LANGUAGE);
    assert_eq!(flagged[0].severity, Severity::Medium);
    assert!(flagged[0].explanation.contains("addict"));
}

#[tokio::test]
async fn stigma_matches_word_boundaries_only() {
    let clean = policies::stigma_language::check("The adjudicator reviewed the case.").await;
    assert!(clean.is_empty(), "\"addict\" must not match inside words");
}

#[tokio::test]
async fn stigma_reports_every_occurrence() {
    let flagged = policies::stigma_language::check("crazy ideas from a crazy year").await;
    assert_eq!(flagged.len(), 2);
    assert!(flagged[0].start_index < flagged[1].start_index);
}

#[tokio::test]
async fn dsm5_flags_nonstandard_diagnosis_phrases() {
    let flagged =
        policies::dsm5_terminology::check("She was diagnosed with extreme sadness disorder.").await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].policy_id, policy::DSM5_TERMINOLOGY);
}

#[tokio::test]
async fn dsm5_accepts_recognized_terminology() {
    let clean = policies::dsm5_terminology::check(
        "He was diagnosed with generalized anxiety disorder last year.",
    )
    .await;
    assert!(clean.is_empty());
}

#[tokio::test]
async fn treatment_qualification_flags_absolute_claims() {
    let flagged =
        policies::treatment_qualification::check("Our counseling will cure what troubles you.")
            .await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].policy_id, policy::TREATMENT_QUALIFICATION);
    assert!(flagged[0].explanation.contains("may help manage"));
}

#[tokio::test]
async fn suicide_discussion_without_resources_is_one_whole_content_violation() {
    let flagged = policies::suicide_safety::check("I feel suicidal some days.").await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].policy_id, policy::SUICIDE_SAFETY);
    assert!(flagged[0].is_whole_content());
}

#[tokio::test]
async fn suicide_discussion_with_lifeline_reference_passes() {
    let flagged =
        policies::suicide_safety::check("I feel suicidal some days. Call 988 if you are in crisis.")
            .await;
    assert!(flagged.is_empty());
}

#[tokio::test]
async fn crisis_text_line_also_satisfies_the_gate() {
    let flagged = policies::suicide_safety::check(
        "Talking about suicide is hard. Text HOME to 741741 to reach support.",
    )
    .await;
    assert!(flagged.is_empty());
}

#[tokio::test]
async fn testimonial_without_consent_is_flagged() {
    let flagged =
        policies::consent::check("A testimonial from one of our clients about group sessions.")
            .await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].policy_id, policy::CONSENT);
    assert!(flagged[0].is_whole_content());
}

#[tokio::test]
async fn testimonial_with_consent_acknowledgment_passes() {
    let flagged = policies::consent::check(
        "A testimonial from one of our clients, shared with written consent.",
    )
    .await;
    assert!(flagged.is_empty());
}
