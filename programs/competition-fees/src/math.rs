//! Integer cent arithmetic
//!
//! Intermediates are widened to i128 so a rate applied to any i64 amount
//! cannot overflow before the final narrowing.

use crate::{constants::BASIS_POINTS_DIVISOR, error::FeeError};

const DIVISOR: i128 = BASIS_POINTS_DIVISOR as i128;
const HALF_DIVISOR: i128 = DIVISOR / 2;

/// `round(amount * bps / 10000)`, halves rounded away from zero.
pub fn apply_bps_rounded(amount: i64, basis_points: u32) -> Result<i64, FeeError> {
    let product = amount as i128 * basis_points as i128;
    let rounded = if product >= 0 {
        (product + HALF_DIVISOR) / DIVISOR
    } else {
        (product - HALF_DIVISOR) / DIVISOR
    };
    narrow(rounded)
}

/// Smallest charge `t` such that `t - t * bps / 10000 >= target`, i.e.
/// `ceil(target / (1 - bps / 10000))`, evaluated on the exact rational.
pub fn gross_up(target: i64, basis_points: u32) -> Result<i64, FeeError> {
    if basis_points >= BASIS_POINTS_DIVISOR {
        return Err(FeeError::InvalidProcessorRate { basis_points });
    }
    if target < 0 {
        return Err(FeeError::NegativeAmount {
            field: "gross_up_target",
            value: target,
        });
    }

    let numerator = target as i128 * DIVISOR;
    let denominator = DIVISOR - basis_points as i128;
    narrow(ceil_div(numerator, denominator))
}

/// Ceiling division for a non-negative numerator and positive denominator.
fn ceil_div(numerator: i128, denominator: i128) -> i128 {
    (numerator + denominator - 1) / denominator
}

pub fn checked_add(a: i64, b: i64) -> Result<i64, FeeError> {
    a.checked_add(b).ok_or(FeeError::MathOverflow)
}

pub fn checked_sub(a: i64, b: i64) -> Result<i64, FeeError> {
    a.checked_sub(b).ok_or(FeeError::MathOverflow)
}

fn narrow(value: i128) -> Result<i64, FeeError> {
    i64::try_from(value).map_err(|_| FeeError::MathOverflow)
}
