use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::config::{CustomPatternRule, RequiredPhraseRule};
use super::directory::{GovernanceContext, GovernanceDirectory};
use super::domain::{policy, sort_violations, Severity, Violation};
use super::policies;

/// Runs all six built-in validators unconditionally and returns the merged
/// violations sorted by start offset. Used for live-editing feedback where
/// no tenant context is available.
pub async fn validate(content: &str) -> Vec<Violation> {
    let (medical, stigma, dsm5, treatment, suicide, consent) = tokio::join!(
        policies::medical_claims::check(content),
        policies::stigma_language::check(content),
        policies::dsm5_terminology::check(content),
        policies::treatment_qualification::check(content),
        policies::suicide_safety::check(content),
        policies::consent::check(content),
    );

    let mut merged = medical;
    merged.extend(stigma);
    merged.extend(dsm5);
    merged.extend(treatment);
    merged.extend(suicide);
    merged.extend(consent);
    sort_violations(merged)
}

/// Result of a context-aware validation, retaining which governance
/// configuration produced it for audit logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextualValidation {
    pub violations: Vec<Violation>,
    pub profile_id: Option<String>,
    pub campaign_id: Option<String>,
    pub client_id: Option<String>,
}

/// Resolves the governance context against the supplied directory, then runs
/// the selected built-in policies plus any profile/campaign custom patterns
/// and required phrases.
pub async fn validate_with_context(
    content: &str,
    context: &GovernanceContext,
    directory: &GovernanceDirectory,
) -> ContextualValidation {
    let resolved = directory.resolve(context);

    let mut selected = resolved.profile.effective_policies();
    if let Some(campaign) = &resolved.campaign {
        selected.retain(|policy_id| {
            !campaign
                .disabled_policies
                .iter()
                .any(|disabled| disabled == policy_id)
        });
    }

    let mut violations = Vec::new();
    for policy_id in selected {
        violations.extend(policies::run_policy(policy_id, content).await);
    }

    let mut patterns: Vec<&CustomPatternRule> = resolved.profile.custom_patterns.iter().collect();
    let mut phrases: Vec<&RequiredPhraseRule> = resolved.profile.required_phrases.iter().collect();
    if let Some(campaign) = &resolved.campaign {
        patterns.extend(campaign.extra_forbidden_patterns.iter());
        phrases.extend(campaign.required_phrases.iter());
    }

    for rule in patterns {
        violations.extend(check_custom_pattern(content, rule));
    }
    for rule in phrases {
        violations.extend(check_required_phrase(content, rule));
    }

    ContextualValidation {
        violations: sort_violations(violations),
        profile_id: resolved.profile_id,
        campaign_id: resolved.campaign_id,
        client_id: resolved.client_id,
    }
}

/// Applies one user-authored regex rule. Malformed patterns are logged and
/// skipped; a bad rule never fails the whole validation.
fn check_custom_pattern(content: &str, rule: &CustomPatternRule) -> Vec<Violation> {
    let Some(pattern) = compile_custom_pattern(rule) else {
        return Vec::new();
    };
    pattern
        .find_iter(content)
        .map(|found| {
            Violation::at_match(
                policy::CUSTOM_PATTERNS,
                rule.severity.unwrap_or(Severity::Medium),
                content,
                found.start(),
                found.end(),
                20,
                rule.explanation.clone(),
            )
        })
        .collect()
}

/// Case-insensitive substring presence check; a missing phrase is a single
/// whole-content violation.
fn check_required_phrase(content: &str, rule: &RequiredPhraseRule) -> Vec<Violation> {
    let present = content.to_lowercase().contains(&rule.phrase.to_lowercase());
    if present {
        return Vec::new();
    }
    vec![Violation::whole_content(
        policy::REQUIRED_PHRASES,
        rule.severity.unwrap_or(Severity::Medium),
        &format!("Required phrase missing: \"{}\"", rule.phrase),
        rule.explanation.clone(),
    )]
}

/// Compiles a caller-supplied pattern, translating `gimsu`-style flag
/// characters to inline regex flags. `g` and `u` are implicit in
/// `find_iter` and UTF-8 handling and are ignored.
fn compile_custom_pattern(rule: &CustomPatternRule) -> Option<Regex> {
    let flags = rule.flags.as_deref().unwrap_or("gi");
    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' => inline.push('i'),
            'm' => inline.push('m'),
            's' => inline.push('s'),
            'g' | 'u' => {}
            other => {
                warn!(rule_id = %rule.id, flag = %other, "ignoring unsupported custom pattern flag");
            }
        }
    }

    let source = if inline.is_empty() {
        rule.pattern.clone()
    } else {
        format!("(?{}){}", inline, rule.pattern)
    };

    match Regex::new(&source) {
        Ok(pattern) => Some(pattern),
        Err(error) => {
            warn!(rule_id = %rule.id, %error, "skipping custom pattern with invalid regex");
            None
        }
    }
}
