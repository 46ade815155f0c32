use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        PlatformDefaults, BASIS_POINTS_DIVISOR, DEFAULT_PASS_PLATFORM_FEES_TO_CUSTOMER,
        DEFAULT_PASS_STRIPE_FEES_TO_CUSTOMER,
    },
    error::FeeError,
};

/// Fee rates and pass-through policy for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfiguration {
    /// Platform percentage in basis points (250 = 2.5%)
    pub platform_percentage_basis_points: u32,
    /// Platform fixed fee in cents (200 = $2.00)
    pub platform_fixed_cents: i64,
    /// Processor percentage in basis points (290 = 2.9%)
    pub stripe_percentage_basis_points: u32,
    /// Processor fixed fee in cents (30 = $0.30)
    pub stripe_fixed_cents: i64,
    /// Processor fee is added to the charge instead of coming out of the payout
    pub pass_stripe_fees_to_customer: bool,
    /// Platform fee is added to the charge instead of coming out of the payout
    pub pass_platform_fees_to_customer: bool,
}

impl FeeConfiguration {
    /// Reject configurations the calculator cannot evaluate.
    pub fn validate(&self) -> Result<(), FeeError> {
        if self.platform_fixed_cents < 0 {
            return Err(FeeError::NegativeAmount {
                field: "platform_fixed_cents",
                value: self.platform_fixed_cents,
            });
        }
        if self.stripe_fixed_cents < 0 {
            return Err(FeeError::NegativeAmount {
                field: "stripe_fixed_cents",
                value: self.stripe_fixed_cents,
            });
        }
        if self.stripe_percentage_basis_points >= BASIS_POINTS_DIVISOR {
            return Err(FeeError::InvalidProcessorRate {
                basis_points: self.stripe_percentage_basis_points,
            });
        }
        Ok(())
    }
}

/// Fee settings stored on a competition. `None` means "use the next tier".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionFeeOverrides {
    /// Basis points
    pub platform_fee_percentage: Option<u32>,
    /// Cents
    pub platform_fee_fixed: Option<i64>,
    pub pass_stripe_fees_to_customer: Option<bool>,
    pub pass_platform_fees_to_customer: Option<bool>,
}

/// Negotiated platform rate stored on the organizing team
/// (e.g. founding organizers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizerFeeOverrides {
    /// Basis points
    pub organizer_fee_percentage: Option<u32>,
    /// Cents
    pub organizer_fee_fixed: Option<i64>,
}

/// Resolve the effective fee configuration.
///
/// Platform rate and fixed fee resolve independently: competition override,
/// then organizer override, then `defaults`. Processor rates always come from
/// `defaults`.
pub fn build_fee_config(
    competition: &CompetitionFeeOverrides,
    organizer: Option<&OrganizerFeeOverrides>,
    defaults: &PlatformDefaults,
) -> FeeConfiguration {
    let organizer = organizer.copied().unwrap_or_default();

    FeeConfiguration {
        platform_percentage_basis_points: competition
            .platform_fee_percentage
            .or(organizer.organizer_fee_percentage)
            .unwrap_or(defaults.platform_percentage_basis_points),
        platform_fixed_cents: competition
            .platform_fee_fixed
            .or(organizer.organizer_fee_fixed)
            .unwrap_or(defaults.platform_fixed_cents),
        stripe_percentage_basis_points: defaults.stripe_percentage_basis_points,
        stripe_fixed_cents: defaults.stripe_fixed_cents,
        pass_stripe_fees_to_customer: competition
            .pass_stripe_fees_to_customer
            .unwrap_or(DEFAULT_PASS_STRIPE_FEES_TO_CUSTOMER),
        pass_platform_fees_to_customer: competition
            .pass_platform_fees_to_customer
            .unwrap_or(DEFAULT_PASS_PLATFORM_FEES_TO_CUSTOMER),
    }
}
