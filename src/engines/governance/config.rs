use serde::{Deserialize, Serialize};

use super::domain::{policy, Severity};

/// Tenant/client-level policy selection plus user-authored rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernanceProfileConfig {
    /// Built-in policy ids that apply for this profile. Empty or entirely
    /// unrecognized lists fall back to all six built-ins.
    #[serde(default)]
    pub enabled_policies: Vec<String>,
    #[serde(default)]
    pub custom_patterns: Vec<CustomPatternRule>,
    #[serde(default)]
    pub required_phrases: Vec<RequiredPhraseRule>,
}

impl GovernanceProfileConfig {
    /// Built-in policy ids selected by this profile, defaulting to all six
    /// when the configured list is absent or names nothing recognizable.
    pub fn effective_policies(&self) -> Vec<&'static str> {
        let recognized: Vec<&'static str> = policy::BUILT_IN
            .iter()
            .copied()
            .filter(|known| self.enabled_policies.iter().any(|id| id == known))
            .collect();
        if recognized.is_empty() {
            policy::BUILT_IN.to_vec()
        } else {
            recognized
        }
    }
}

/// Per-campaign override layered on top of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Built-in policy ids suppressed for this campaign even when the
    /// profile enables them.
    #[serde(default)]
    pub disabled_policies: Vec<String>,
    #[serde(default)]
    pub extra_forbidden_patterns: Vec<CustomPatternRule>,
    #[serde(default)]
    pub required_phrases: Vec<RequiredPhraseRule>,
}

/// User-authored regex rule attached to a profile or campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPatternRule {
    pub id: String,
    pub pattern: String,
    pub explanation: String,
    #[serde(default)]
    pub severity: Option<Severity>,
    /// Regex flag characters in the `gimsu` style; defaults to `gi`.
    #[serde(default)]
    pub flags: Option<String>,
}

/// Phrase that must appear somewhere in the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredPhraseRule {
    pub id: String,
    pub phrase: String,
    pub explanation: String,
    #[serde(default)]
    pub severity: Option<Severity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_enables_all_built_ins() {
        let profile = GovernanceProfileConfig::default();
        assert_eq!(profile.effective_policies(), policy::BUILT_IN.to_vec());
    }

    #[test]
    fn unrecognized_policy_ids_fall_back_to_defaults() {
        let profile = GovernanceProfileConfig {
            enabled_policies: vec!["made-up-policy".to_string()],
            ..GovernanceProfileConfig::default()
        };
        assert_eq!(profile.effective_policies(), policy::BUILT_IN.to_vec());
    }

    #[test]
    fn recognized_subset_is_honored() {
        let profile = GovernanceProfileConfig {
            enabled_policies: vec![
                policy::SUICIDE_SAFETY.to_string(),
                policy::STIGMA_LANGUAGE.to_string(),
                "made-up-policy".to_string(),
            ],
            ..GovernanceProfileConfig::default()
        };
        assert_eq!(
            profile.effective_policies(),
            vec![policy::STIGMA_LANGUAGE, policy::SUICIDE_SAFETY]
        );
    }
}
