//! Governance validation and strategy intake engines for regulated
//! behavioral-health marketing.
//!
//! The crate exposes two independent, side-effect-free engines:
//!
//! - [`engines::governance`] scans marketing copy against content policies
//!   (medical claims, stigma language, crisis-resource requirements, and so
//!   on) and rolls detected violations into an auditable 0-100 compliance
//!   score.
//! - [`engines::strategy`] converts free-text campaign intake into a
//!   structured, safety-constrained plan: detected signals, a campaign
//!   archetype, cadence guidance, charter-safe experiments, a sanitized
//!   campaign brief, and drafting prompts for downstream copy production.
//!
//! Neither engine performs I/O or touches storage. Persistence, tenancy,
//! authentication, and delivery belong to the calling application.

pub mod engines;
