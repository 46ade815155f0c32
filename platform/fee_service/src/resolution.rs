//! Registration fee resolution
//!
//! Order: division-specific fee, then the competition default, then free.

use tracing::debug;

use crate::{
    error::{FeeServiceError, Result},
    store::CompetitionStore,
};

/// Registration fee in cents for a division of a competition.
///
/// An explicit division fee of `0` is returned as-is; a division row without a
/// fee falls through to the competition default.
pub async fn get_registration_fee<S>(store: &S, competition_id: &str, division_id: &str) -> Result<i64>
where
    S: CompetitionStore + ?Sized,
{
    if let Some(fee_cents) = store
        .find_division_fee(competition_id, division_id)
        .await?
        .and_then(|row| row.fee_cents)
    {
        debug!(competition_id, division_id, fee_cents, "using division fee");
        return Ok(fee_cents);
    }

    let competition = store
        .find_competition(competition_id)
        .await?
        .ok_or_else(|| FeeServiceError::CompetitionNotFound {
            competition_id: competition_id.to_string(),
        })?;

    let fee_cents = competition.default_registration_fee_cents.unwrap_or(0);
    debug!(competition_id, division_id, fee_cents, "using competition default fee");
    Ok(fee_cents)
}

/// Resolve against already-loaded fee data, used when many divisions are
/// looked up at once.
pub(crate) fn resolve_fee(division_fee: Option<Option<i64>>, competition_default: Option<i64>) -> i64 {
    division_fee
        .flatten()
        .or(competition_default)
        .unwrap_or(0)
}
