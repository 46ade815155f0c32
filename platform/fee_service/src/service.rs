//! Fee service: registration pricing and revenue reporting for competitions

use competition_fees::{
    application_fee_cents, build_fee_config, calculate_competition_fees, FeeBreakdown,
    FeeConfiguration, PlatformDefaults,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    config::FeeServiceConfig,
    error::{FeeServiceError, Result},
    models::Competition,
    resolution,
    revenue::{self, CompetitionRevenueStats},
    store::{CompetitionStore, PurchaseLedger},
};

/// What an athlete pays to register for a division
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistrationQuote {
    /// No charge; the registration skips checkout
    Free,
    Paid {
        breakdown: FeeBreakdown,
        /// Platform's share of a destination charge
        application_fee_cents: i64,
    },
}

impl RegistrationQuote {
    pub fn is_free(&self) -> bool {
        matches!(self, RegistrationQuote::Free)
    }

    pub fn total_charge_cents(&self) -> i64 {
        match self {
            RegistrationQuote::Free => 0,
            RegistrationQuote::Paid { breakdown, .. } => breakdown.total_charge_cents,
        }
    }
}

/// Fee service
pub struct FeeService<S> {
    store: Arc<S>,
    defaults: PlatformDefaults,
}

impl<S> FeeService<S>
where
    S: CompetitionStore + PurchaseLedger,
{
    /// Create new fee service
    pub fn new(store: Arc<S>, config: &FeeServiceConfig) -> Self {
        Self {
            store,
            defaults: config.platform_defaults,
        }
    }

    pub fn platform_defaults(&self) -> &PlatformDefaults {
        &self.defaults
    }

    /// Registration fee for a division, see [`resolution::get_registration_fee`]
    pub async fn get_registration_fee(&self, competition_id: &str, division_id: &str) -> Result<i64> {
        resolution::get_registration_fee(self.store.as_ref(), competition_id, division_id).await
    }

    /// Effective fee configuration for a competition, including its organizer's rate
    pub async fn fee_config_for(&self, competition_id: &str) -> Result<FeeConfiguration> {
        let competition = self.load_competition(competition_id).await?;
        self.build_config(&competition).await
    }

    /// Price a registration
    pub async fn quote_registration(&self, competition_id: &str, division_id: &str) -> Result<RegistrationQuote> {
        let registration_fee_cents = self.get_registration_fee(competition_id, division_id).await?;

        if registration_fee_cents == 0 {
            info!(competition_id, division_id, "free registration");
            return Ok(RegistrationQuote::Free);
        }

        let competition = self.load_competition(competition_id).await?;
        let config = self.build_config(&competition).await?;
        let breakdown = calculate_competition_fees(registration_fee_cents, &config)?;
        let application_fee_cents = application_fee_cents(&breakdown);

        info!(
            competition_id,
            division_id,
            registration_fee_cents,
            total_charge_cents = breakdown.total_charge_cents,
            organizer_net_cents = breakdown.organizer_net_cents,
            application_fee_cents,
            "quoted registration"
        );

        Ok(RegistrationQuote::Paid {
            breakdown,
            application_fee_cents,
        })
    }

    /// Revenue totals over completed purchases
    pub async fn revenue_stats(&self, competition_id: &str) -> Result<CompetitionRevenueStats> {
        revenue::get_competition_revenue_stats(self.store.as_ref(), competition_id).await
    }

    async fn load_competition(&self, competition_id: &str) -> Result<Competition> {
        self.store
            .find_competition(competition_id)
            .await?
            .ok_or_else(|| FeeServiceError::CompetitionNotFound {
                competition_id: competition_id.to_string(),
            })
    }

    async fn build_config(&self, competition: &Competition) -> Result<FeeConfiguration> {
        let organizer = self
            .store
            .find_organizing_team(&competition.organizing_team_id)
            .await?
            .map(|team| team.fee_overrides());

        if organizer.is_none() {
            debug!(
                competition_id = %competition.id,
                team_id = %competition.organizing_team_id,
                "organizing team not found, no organizer rate applied"
            );
        }

        Ok(build_fee_config(
            &competition.fee_overrides(),
            organizer.as_ref(),
            &self.defaults,
        ))
    }
}
