use serde::{Deserialize, Serialize};

/// 10000 bp = 100%
pub const BASIS_POINTS_DIVISOR: u32 = 10_000;

// Standard platform rate: 2.5% + $2.00
pub const PLATFORM_FEE_BPS: u32 = 250;
pub const PLATFORM_FEE_FIXED_CENTS: i64 = 200;

// Card processor rate: 2.9% + $0.30
pub const STRIPE_FEE_BPS: u32 = 290;
pub const STRIPE_FEE_FIXED_CENTS: i64 = 30;

// Pass-through policy when a competition leaves it unset
pub const DEFAULT_PASS_STRIPE_FEES_TO_CUSTOMER: bool = false;
pub const DEFAULT_PASS_PLATFORM_FEES_TO_CUSTOMER: bool = true;

/// Platform-wide fee rates that apply when neither the competition nor the
/// organizing team overrides them. The processor rate is never overridable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDefaults {
    pub platform_percentage_basis_points: u32,
    pub platform_fixed_cents: i64,
    pub stripe_percentage_basis_points: u32,
    pub stripe_fixed_cents: i64,
}

impl PlatformDefaults {
    pub const STANDARD: PlatformDefaults = PlatformDefaults {
        platform_percentage_basis_points: PLATFORM_FEE_BPS,
        platform_fixed_cents: PLATFORM_FEE_FIXED_CENTS,
        stripe_percentage_basis_points: STRIPE_FEE_BPS,
        stripe_fixed_cents: STRIPE_FEE_FIXED_CENTS,
    };
}

impl Default for PlatformDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}
