//! The six built-in content policy validators.
//!
//! Each validator is a pure async function over the raw content string,
//! returning an empty list when the content is clean. Rule tables are plain
//! static data so they can be audited and tested in isolation from the
//! matching logic.

pub(crate) mod consent;
pub(crate) mod dsm5_terminology;
pub(crate) mod medical_claims;
pub(crate) mod stigma_language;
pub(crate) mod suicide_safety;
pub(crate) mod treatment_qualification;

use super::domain::{policy, Violation};

/// Runs one built-in validator by policy id. Unknown ids return nothing;
/// selection is validated upstream against `policy::BUILT_IN`.
pub(crate) async fn run_policy(policy_id: &str, content: &str) -> Vec<Violation> {
    match policy_id {
        policy::MEDICAL_CLAIMS => medical_claims::check(content).await,
        policy::STIGMA_LANGUAGE => stigma_language::check(content).await,
        policy::DSM5_TERMINOLOGY => dsm5_terminology::check(content).await,
        policy::TREATMENT_QUALIFICATION => treatment_qualification::check(content).await,
        policy::SUICIDE_SAFETY => suicide_safety::check(content).await,
        policy::CONSENT => consent::check(content).await,
        _ => Vec::new(),
    }
}
