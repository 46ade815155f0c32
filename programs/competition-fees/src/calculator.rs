//! Registration fee breakdown
//!
//! Four pass-through policies, from the two flags on [`FeeConfiguration`]:
//! - customer pays both: charge is grossed up so the organizer keeps the full
//!   registration fee
//! - customer pays platform only: organizer absorbs the processor fee
//! - customer pays processor only: organizer absorbs the platform fee
//! - organizer absorbs both: customer pays exactly the registration fee

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    config::FeeConfiguration,
    error::FeeError,
    math::{apply_bps_rounded, checked_add, checked_sub, gross_up},
};

/// Complete fee breakdown for one registration, all amounts in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Base fee set by the organizer
    pub registration_fee_cents: i64,
    /// Platform fee, whoever pays it
    pub platform_fee_cents: i64,
    /// Processor fee, whoever pays it
    pub stripe_fee_cents: i64,
    /// Amount charged to the athlete
    pub total_charge_cents: i64,
    /// Amount the organizer keeps. Not clamped at zero.
    pub organizer_net_cents: i64,
    pub stripe_fees_passed_to_customer: bool,
    pub platform_fees_passed_to_customer: bool,
}

/// Compute the fee breakdown for a registration.
///
/// When the processor fee is passed on, the charge must cover a percentage of
/// itself. The charge is solved once as `ceil((subtotal + fixed) / (1 - rate))`
/// and the processor fee is then recomputed from that rounded charge, which can
/// leave a one or two cent residual against the exact target.
pub fn calculate_competition_fees(
    registration_fee_cents: i64,
    config: &FeeConfiguration,
) -> Result<FeeBreakdown, FeeError> {
    if registration_fee_cents < 0 {
        return Err(FeeError::NegativeAmount {
            field: "registration_fee_cents",
            value: registration_fee_cents,
        });
    }
    config.validate()?;

    // Percentage term is rounded before the fixed term is added
    let platform_fee_cents = checked_add(
        apply_bps_rounded(registration_fee_cents, config.platform_percentage_basis_points)?,
        config.platform_fixed_cents,
    )?;

    let platform_fee_for_customer = if config.pass_platform_fees_to_customer {
        platform_fee_cents
    } else {
        0
    };
    let subtotal_cents = checked_add(registration_fee_cents, platform_fee_for_customer)?;

    let stripe_rate = config.stripe_percentage_basis_points;
    let (total_charge_cents, stripe_fee_cents, organizer_net_cents) =
        if config.pass_stripe_fees_to_customer {
            let total = gross_up(checked_add(subtotal_cents, config.stripe_fixed_cents)?, stripe_rate)?;
            let stripe_fee = checked_add(apply_bps_rounded(total, stripe_rate)?, config.stripe_fixed_cents)?;
            let net = if config.pass_platform_fees_to_customer {
                registration_fee_cents
            } else {
                checked_sub(registration_fee_cents, platform_fee_cents)?
            };
            (total, stripe_fee, net)
        } else {
            let total = subtotal_cents;
            let stripe_fee = checked_add(apply_bps_rounded(total, stripe_rate)?, config.stripe_fixed_cents)?;
            // If the platform fee was charged it sits inside `total` and is carved
            // back out; if not, the organizer absorbs it. Same subtraction.
            let net = checked_sub(checked_sub(total, stripe_fee)?, platform_fee_cents)?;
            (total, stripe_fee, net)
        };

    trace!(
        registration_fee_cents,
        platform_fee_cents,
        stripe_fee_cents,
        total_charge_cents,
        organizer_net_cents,
        "computed fee breakdown"
    );

    Ok(FeeBreakdown {
        registration_fee_cents,
        platform_fee_cents,
        stripe_fee_cents,
        total_charge_cents,
        organizer_net_cents,
        stripe_fees_passed_to_customer: config.pass_stripe_fees_to_customer,
        platform_fees_passed_to_customer: config.pass_platform_fees_to_customer,
    })
}

/// Application fee for a destination charge.
///
/// The connected account receives `total - application_fee`, which is exactly
/// the organizer net. The platform pays the processor out of the application fee.
pub fn application_fee_cents(breakdown: &FeeBreakdown) -> i64 {
    breakdown
        .total_charge_cents
        .saturating_sub(breakdown.organizer_net_cents)
        .max(0)
}
