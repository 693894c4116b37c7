use crate::engines::strategy::archetype::Archetype;
use crate::engines::strategy::guardrails::{
    find_banned_outcome_term, find_prohibited_phrase, sanitize_field, violates_charter,
};
use crate::engines::strategy::library::{
    cadence_for, experiment_by_id, experiment_library, experiments_for,
};

const ALL_ARCHETYPES: [Archetype; 4] = [
    Archetype::ProgramLaunch,
    Archetype::TrustBuilding,
    Archetype::ComplianceVisibility,
    Archetype::ReferralEnablement,
];

/// Static invariant over the experiment library data itself: no urgency
/// calls-to-action and no individual-story phrasing anywhere.
#[test]
fn experiment_library_is_charter_safe() {
    for experiment in experiment_library() {
        for text in [
            experiment.name,
            experiment.hypothesis,
            experiment.variant_a,
            experiment.variant_b,
        ] {
            assert!(
                !violates_charter(text),
                "experiment {} carries charter-violating text: {text}",
                experiment.id
            );
        }
    }
}

#[test]
fn experiment_library_is_free_of_prohibited_claims() {
    for experiment in experiment_library() {
        for text in [
            experiment.name,
            experiment.hypothesis,
            experiment.variant_a,
            experiment.variant_b,
        ] {
            assert!(
                find_prohibited_phrase(text).is_none(),
                "experiment {} carries a prohibited claim: {text}",
                experiment.id
            );
        }
    }
}

#[test]
fn every_experiment_names_at_least_one_archetype() {
    for experiment in experiment_library() {
        assert!(
            !experiment.applicable_archetypes.is_empty(),
            "experiment {} is unreachable",
            experiment.id
        );
    }
}

#[test]
fn experiment_selection_caps_at_five() {
    for primary in ALL_ARCHETYPES {
        for secondary in ALL_ARCHETYPES {
            let selected = experiments_for(primary, Some(secondary));
            assert!(selected.len() <= 5);
            for experiment in &selected {
                assert!(experiment
                    .applicable_archetypes
                    .iter()
                    .any(|archetype| *archetype == primary || *archetype == secondary));
            }
        }
    }
}

#[test]
fn experiment_lookup_by_id() {
    assert!(experiment_by_id("provider-one-pager-format").is_some());
    assert!(experiment_by_id("does-not-exist").is_none());
}

#[test]
fn every_archetype_has_a_cadence_rule() {
    for archetype in ALL_ARCHETYPES {
        let rule = cadence_for(archetype);
        assert_eq!(rule.archetype, archetype);
        assert!(!rule.email_frequency.is_empty());
        assert!(!rule.social_frequency.is_empty());
    }
}

#[test]
fn sanitizer_replaces_in_place_when_a_replacement_exists() {
    let sanitized = sanitize_field(
        "Our program guarantees a calmer daily routine.",
        "fallback copy",
    );
    assert!(!sanitized.contains("guarantees"));
    assert!(sanitized.contains("is designed to support"));
    assert!(sanitized.contains("calmer daily routine"));
}

#[test]
fn sanitizer_discards_whole_field_on_no_replacement_rules() {
    let sanitized = sanitize_field(
        "This will cure seasonal gloom in two weeks.",
        "fallback copy",
    );
    assert_eq!(sanitized, "fallback copy");
}

#[test]
fn sanitizer_passes_clean_text_through_unchanged() {
    let clean = "Plain information about getting started with counseling.";
    assert_eq!(sanitize_field(clean, "fallback"), clean);
}

#[test]
fn prohibited_phrase_lookup_is_case_insensitive() {
    assert_eq!(
        find_prohibited_phrase("this is CLINICALLY PROVEN to work"),
        Some("clinically proven")
    );
    assert!(find_prohibited_phrase("plain supportive copy").is_none());
}

#[test]
fn banned_outcome_lookup_finds_clinical_terms() {
    assert_eq!(
        find_banned_outcome_term("track the recovery rate per quarter"),
        Some("recovery rate")
    );
    assert!(find_banned_outcome_term("track newsletter signups").is_none());
}
