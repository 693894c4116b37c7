use serde::{Deserialize, Serialize};

use super::signals::{signal_detected, Signal, SignalKey};

/// The four campaign strategy types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    ProgramLaunch,
    TrustBuilding,
    ComplianceVisibility,
    ReferralEnablement,
}

impl Archetype {
    pub const fn as_str(self) -> &'static str {
        match self {
            Archetype::ProgramLaunch => "program-launch",
            Archetype::TrustBuilding => "trust-building",
            Archetype::ComplianceVisibility => "compliance-visibility",
            Archetype::ReferralEnablement => "referral-enablement",
        }
    }
}

/// Strict-priority decision tree over detected signals; the first matching
/// tier wins.
pub(crate) fn decide_archetypes(signals: &[Signal]) -> (Archetype, Option<Archetype>) {
    let launch = signal_detected(signals, SignalKey::Launch);
    let referral = signal_detected(signals, SignalKey::ReferralEnablement)
        || signal_detected(signals, SignalKey::IntegrationOfCare);
    let trust = signal_detected(signals, SignalKey::TrustBuilding);

    if signal_detected(signals, SignalKey::ComplianceVisibility) {
        let secondary = if launch {
            Some(Archetype::ProgramLaunch)
        } else if referral {
            Some(Archetype::ReferralEnablement)
        } else if trust {
            Some(Archetype::TrustBuilding)
        } else {
            None
        };
        return (Archetype::ComplianceVisibility, secondary);
    }

    if launch {
        let secondary = if referral {
            Some(Archetype::ReferralEnablement)
        } else if trust {
            Some(Archetype::TrustBuilding)
        } else {
            None
        };
        return (Archetype::ProgramLaunch, secondary);
    }

    if referral {
        let secondary = trust.then_some(Archetype::TrustBuilding);
        return (Archetype::ReferralEnablement, secondary);
    }

    (Archetype::TrustBuilding, None)
}
