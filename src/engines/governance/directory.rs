use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::{CampaignConfig, GovernanceProfileConfig};

/// Identifiers a caller passes alongside content to select the governance
/// configuration that should apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceContext {
    pub client_id: Option<String>,
    pub profile_id: Option<String>,
    pub campaign_id: Option<String>,
}

/// Persisted governance profile row, already loaded by the calling layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceProfileRecord {
    pub profile_id: String,
    pub client_id: String,
    pub active: bool,
    pub updated_at: DateTime<Utc>,
    pub config: GovernanceProfileConfig,
}

/// Persisted campaign row with its optional governance overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub campaign_id: String,
    pub client_id: String,
    pub profile_id: Option<String>,
    pub config: CampaignConfig,
}

/// Governance configuration in effect for one validation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedGovernance {
    pub profile_id: Option<String>,
    pub campaign_id: Option<String>,
    pub client_id: Option<String>,
    pub profile: GovernanceProfileConfig,
    pub campaign: Option<CampaignConfig>,
}

/// In-memory view over caller-resolved profile and campaign rows. The core
/// never reads storage; the calling layer loads whatever rows the tenant
/// owns and hands them over as plain data.
#[derive(Debug, Clone, Default)]
pub struct GovernanceDirectory {
    profiles: Vec<GovernanceProfileRecord>,
    campaigns: Vec<CampaignRecord>,
}

impl GovernanceDirectory {
    pub fn new(profiles: Vec<GovernanceProfileRecord>, campaigns: Vec<CampaignRecord>) -> Self {
        Self {
            profiles,
            campaigns,
        }
    }

    /// Resolves a context to concrete configuration using a three-tier
    /// precedence: campaign, then explicit profile, then the most recently
    /// updated active profile for the client. Nothing resolvable means all
    /// built-in policies apply with no custom rules.
    pub fn resolve(&self, context: &GovernanceContext) -> ResolvedGovernance {
        if let Some(campaign_id) = &context.campaign_id {
            if let Some(campaign) = self
                .campaigns
                .iter()
                .find(|record| &record.campaign_id == campaign_id)
            {
                let profile = campaign
                    .profile_id
                    .as_ref()
                    .and_then(|profile_id| self.profile_by_id(profile_id));
                return ResolvedGovernance {
                    profile_id: profile.map(|record| record.profile_id.clone()),
                    campaign_id: Some(campaign.campaign_id.clone()),
                    client_id: Some(campaign.client_id.clone()),
                    profile: profile
                        .map(|record| record.config.clone())
                        .unwrap_or_default(),
                    campaign: Some(campaign.config.clone()),
                };
            }
        }

        if let Some(profile_id) = &context.profile_id {
            if let Some(record) = self.profile_by_id(profile_id) {
                return ResolvedGovernance {
                    profile_id: Some(record.profile_id.clone()),
                    campaign_id: None,
                    client_id: Some(record.client_id.clone()),
                    profile: record.config.clone(),
                    campaign: None,
                };
            }
        }

        if let Some(client_id) = &context.client_id {
            if let Some(record) = self
                .profiles
                .iter()
                .filter(|record| record.active && &record.client_id == client_id)
                .max_by_key(|record| record.updated_at)
            {
                return ResolvedGovernance {
                    profile_id: Some(record.profile_id.clone()),
                    campaign_id: None,
                    client_id: Some(record.client_id.clone()),
                    profile: record.config.clone(),
                    campaign: None,
                };
            }
        }

        ResolvedGovernance::default()
    }

    fn profile_by_id(&self, profile_id: &str) -> Option<&GovernanceProfileRecord> {
        self.profiles
            .iter()
            .find(|record| record.profile_id == profile_id)
    }
}
