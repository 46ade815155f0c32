//! Records read from the competition and commerce stores

use chrono::{DateTime, Utc};
use competition_fees::{CompetitionFeeOverrides, FeeBreakdown, OrganizerFeeOverrides};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Competition with its fee settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub organizing_team_id: String,
    pub default_registration_fee_cents: Option<i64>,
    /// Basis points
    pub platform_fee_percentage: Option<u32>,
    /// Cents
    pub platform_fee_fixed: Option<i64>,
    pub pass_stripe_fees_to_customer: Option<bool>,
    pub pass_platform_fees_to_customer: Option<bool>,
}

impl Competition {
    pub fn new(id: &str, name: &str, organizing_team_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            organizing_team_id: organizing_team_id.to_string(),
            default_registration_fee_cents: None,
            platform_fee_percentage: None,
            platform_fee_fixed: None,
            pass_stripe_fees_to_customer: None,
            pass_platform_fees_to_customer: None,
        }
    }

    pub fn with_default_fee(mut self, fee_cents: i64) -> Self {
        self.default_registration_fee_cents = Some(fee_cents);
        self
    }

    pub fn fee_overrides(&self) -> CompetitionFeeOverrides {
        CompetitionFeeOverrides {
            platform_fee_percentage: self.platform_fee_percentage,
            platform_fee_fixed: self.platform_fee_fixed,
            pass_stripe_fees_to_customer: self.pass_stripe_fees_to_customer,
            pass_platform_fees_to_customer: self.pass_platform_fees_to_customer,
        }
    }
}

/// Team that runs competitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizingTeam {
    pub id: String,
    pub name: String,
    /// Basis points
    pub organizer_fee_percentage: Option<u32>,
    /// Cents
    pub organizer_fee_fixed: Option<i64>,
}

impl OrganizingTeam {
    pub fn fee_overrides(&self) -> OrganizerFeeOverrides {
        OrganizerFeeOverrides {
            organizer_fee_percentage: self.organizer_fee_percentage,
            organizer_fee_fixed: self.organizer_fee_fixed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: String,
    pub label: String,
}

/// Per-division fee row. `fee_cents: None` means not overridden; `Some(0)`
/// means the division is free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionFee {
    pub competition_id: String,
    pub division_id: String,
    pub fee_cents: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

/// Registration purchase with its fee breakdown as charged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub competition_id: String,
    pub division_id: Option<String>,
    pub status: PurchaseStatus,
    pub total_cents: i64,
    pub platform_fee_cents: i64,
    pub stripe_fee_cents: i64,
    pub organizer_net_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    /// Purchase record for a computed breakdown
    pub fn from_breakdown(
        competition_id: &str,
        division_id: Option<&str>,
        status: PurchaseStatus,
        breakdown: &FeeBreakdown,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            competition_id: competition_id.to_string(),
            division_id: division_id.map(str::to_string),
            status,
            total_cents: breakdown.total_charge_cents,
            platform_fee_cents: breakdown.platform_fee_cents,
            stripe_fee_cents: breakdown.stripe_fee_cents,
            organizer_net_cents: breakdown.organizer_net_cents,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == PurchaseStatus::Completed
    }
}
