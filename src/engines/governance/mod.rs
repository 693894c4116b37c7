//! Content governance: policy validation and compliance scoring.
//!
//! The composite validator fans out over six built-in policy checkers plus
//! any tenant-authored custom rules, and the scoring calculator rolls the
//! merged violation list into an auditable 0-100 compliance score.

pub(crate) mod composite;
pub mod config;
pub mod directory;
pub mod domain;
pub(crate) mod policies;
pub(crate) mod scoring;

#[cfg(test)]
mod tests;

pub use composite::{validate, validate_with_context, ContextualValidation};
pub use config::{CampaignConfig, CustomPatternRule, GovernanceProfileConfig, RequiredPhraseRule};
pub use directory::{
    CampaignRecord, GovernanceContext, GovernanceDirectory, GovernanceProfileRecord,
    ResolvedGovernance,
};
pub use domain::{policy, Severity, Violation, MAX_CONTENT_CHARS};
pub use scoring::{score_violations, ComplianceScore};
