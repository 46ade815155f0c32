//! Competition registration fee engine
//!
//! Computes platform and processor fees for a registration, the amount charged
//! to the athlete and the organizer payout, under the four pass-through
//! policies. Pure integer arithmetic on cents, no I/O.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod math;

pub use calculator::{application_fee_cents, calculate_competition_fees, FeeBreakdown};
pub use config::{
    build_fee_config, CompetitionFeeOverrides, FeeConfiguration, OrganizerFeeOverrides,
};
pub use constants::{PlatformDefaults, BASIS_POINTS_DIVISOR};
pub use error::FeeError;
pub use format::format_cents;
