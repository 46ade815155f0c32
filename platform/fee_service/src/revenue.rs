//! Revenue reporting over completed purchases
//!
//! Sums the fee fields already stored on each purchase; nothing is recomputed.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::{
    error::Result,
    models::Purchase,
    resolution::resolve_fee,
    store::{CompetitionStore, PurchaseLedger},
};

/// Bucket for purchases that carry no division
pub const UNKNOWN_DIVISION_ID: &str = "unknown";
pub const UNKNOWN_DIVISION_LABEL: &str = "Unknown";

/// Revenue totals for a competition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRevenueStats {
    /// Collected from athletes
    pub total_gross_cents: i64,
    /// Platform revenue
    pub total_platform_fee_cents: i64,
    /// Processor fees
    pub total_stripe_fee_cents: i64,
    /// Organizer revenue after all fees
    pub total_organizer_net_cents: i64,
    pub purchase_count: u64,
    /// In order of first purchase
    pub by_division: Vec<DivisionRevenue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionRevenue {
    pub division_id: String,
    pub division_label: String,
    pub purchase_count: u64,
    /// Ticket price for the division
    pub registration_fee_cents: i64,
    pub gross_cents: i64,
    pub platform_fee_cents: i64,
    pub stripe_fee_cents: i64,
    pub organizer_net_cents: i64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    purchase_count: u64,
    gross_cents: i64,
    platform_fee_cents: i64,
    stripe_fee_cents: i64,
    organizer_net_cents: i64,
}

impl Totals {
    fn add(&mut self, purchase: &Purchase) {
        self.purchase_count += 1;
        self.gross_cents += purchase.total_cents;
        self.platform_fee_cents += purchase.platform_fee_cents;
        self.stripe_fee_cents += purchase.stripe_fee_cents;
        self.organizer_net_cents += purchase.organizer_net_cents;
    }
}

/// Aggregate completed purchases for a competition, overall and per division.
pub async fn get_competition_revenue_stats<S>(store: &S, competition_id: &str) -> Result<CompetitionRevenueStats>
where
    S: CompetitionStore + PurchaseLedger + ?Sized,
{
    let purchases = store.completed_purchases(competition_id).await?;

    let mut division_ids: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for division_id in purchases.iter().filter_map(|p| p.division_id.as_ref()) {
        if seen.insert(division_id.as_str()) {
            division_ids.push(division_id.clone());
        }
    }

    let (labels, division_fees) = if division_ids.is_empty() {
        (HashMap::new(), HashMap::new())
    } else {
        let labels: HashMap<String, String> = store
            .find_divisions(&division_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d.label))
            .collect();
        let fees: HashMap<String, Option<i64>> = store
            .find_division_fees(competition_id, &division_ids)
            .await?
            .into_iter()
            .map(|f| (f.division_id, f.fee_cents))
            .collect();
        (labels, fees)
    };

    let default_fee_cents = match store.find_competition(competition_id).await? {
        Some(competition) => competition.default_registration_fee_cents,
        None => {
            warn!(competition_id, "revenue stats requested for unknown competition");
            None
        }
    };

    let mut totals = Totals::default();
    let mut order: Vec<String> = Vec::new();
    let mut per_division: HashMap<String, Totals> = HashMap::new();

    for purchase in &purchases {
        totals.add(purchase);

        let key = purchase
            .division_id
            .clone()
            .unwrap_or_else(|| UNKNOWN_DIVISION_ID.to_string());
        per_division
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Totals::default()
            })
            .add(purchase);
    }

    let by_division = order
        .into_iter()
        .map(|division_id| {
            let stats = per_division.get(&division_id).copied().unwrap_or_default();
            DivisionRevenue {
                division_label: labels
                    .get(&division_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_DIVISION_LABEL.to_string()),
                registration_fee_cents: resolve_fee(division_fees.get(&division_id).copied(), default_fee_cents),
                purchase_count: stats.purchase_count,
                gross_cents: stats.gross_cents,
                platform_fee_cents: stats.platform_fee_cents,
                stripe_fee_cents: stats.stripe_fee_cents,
                organizer_net_cents: stats.organizer_net_cents,
                division_id,
            }
        })
        .collect();

    info!(
        competition_id,
        purchase_count = totals.purchase_count,
        total_gross_cents = totals.gross_cents,
        "computed revenue stats"
    );

    Ok(CompetitionRevenueStats {
        total_gross_cents: totals.gross_cents,
        total_platform_fee_cents: totals.platform_fee_cents,
        total_stripe_fee_cents: totals.stripe_fee_cents,
        total_organizer_net_cents: totals.organizer_net_cents,
        purchase_count: totals.purchase_count,
        by_division,
    })
}
