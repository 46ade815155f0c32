//! Read-side store interfaces and an in-memory implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::{
    error::Result,
    models::{Competition, Division, DivisionFee, OrganizingTeam, Purchase},
};

/// Competition, division and organizer settings
#[async_trait]
pub trait CompetitionStore: Send + Sync {
    async fn find_competition(&self, competition_id: &str) -> Result<Option<Competition>>;

    async fn find_division_fee(
        &self,
        competition_id: &str,
        division_id: &str,
    ) -> Result<Option<DivisionFee>>;

    async fn find_division_fees(
        &self,
        competition_id: &str,
        division_ids: &[String],
    ) -> Result<Vec<DivisionFee>>;

    async fn find_divisions(&self, division_ids: &[String]) -> Result<Vec<Division>>;

    async fn find_organizing_team(&self, team_id: &str) -> Result<Option<OrganizingTeam>>;
}

/// Purchase ledger
#[async_trait]
pub trait PurchaseLedger: Send + Sync {
    /// Purchases in `Completed` status for a competition, oldest first
    async fn completed_purchases(&self, competition_id: &str) -> Result<Vec<Purchase>>;
}

/// Store backed by process memory
#[derive(Default)]
pub struct InMemoryStore {
    competitions: RwLock<HashMap<String, Competition>>,
    teams: RwLock<HashMap<String, OrganizingTeam>>,
    divisions: RwLock<HashMap<String, Division>>,
    division_fees: RwLock<HashMap<(String, String), DivisionFee>>,
    purchases: RwLock<Vec<Purchase>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_competition(&self, competition: Competition) {
        self.competitions
            .write()
            .await
            .insert(competition.id.clone(), competition);
    }

    pub async fn insert_team(&self, team: OrganizingTeam) {
        self.teams.write().await.insert(team.id.clone(), team);
    }

    pub async fn insert_division(&self, id: &str, label: &str) {
        self.divisions.write().await.insert(
            id.to_string(),
            Division {
                id: id.to_string(),
                label: label.to_string(),
            },
        );
    }

    pub async fn set_division_fee(&self, competition_id: &str, division_id: &str, fee_cents: Option<i64>) {
        self.division_fees.write().await.insert(
            (competition_id.to_string(), division_id.to_string()),
            DivisionFee {
                competition_id: competition_id.to_string(),
                division_id: division_id.to_string(),
                fee_cents,
            },
        );
    }

    pub async fn record_purchase(&self, purchase: Purchase) {
        self.purchases.write().await.push(purchase);
    }
}

#[async_trait]
impl CompetitionStore for InMemoryStore {
    async fn find_competition(&self, competition_id: &str) -> Result<Option<Competition>> {
        Ok(self.competitions.read().await.get(competition_id).cloned())
    }

    async fn find_division_fee(
        &self,
        competition_id: &str,
        division_id: &str,
    ) -> Result<Option<DivisionFee>> {
        let key = (competition_id.to_string(), division_id.to_string());
        Ok(self.division_fees.read().await.get(&key).cloned())
    }

    async fn find_division_fees(
        &self,
        competition_id: &str,
        division_ids: &[String],
    ) -> Result<Vec<DivisionFee>> {
        let fees = self.division_fees.read().await;
        Ok(division_ids
            .iter()
            .filter_map(|division_id| fees.get(&(competition_id.to_string(), division_id.clone())))
            .cloned()
            .collect())
    }

    async fn find_divisions(&self, division_ids: &[String]) -> Result<Vec<Division>> {
        let divisions = self.divisions.read().await;
        Ok(division_ids
            .iter()
            .filter_map(|id| divisions.get(id))
            .cloned()
            .collect())
    }

    async fn find_organizing_team(&self, team_id: &str) -> Result<Option<OrganizingTeam>> {
        Ok(self.teams.read().await.get(team_id).cloned())
    }
}

#[async_trait]
impl PurchaseLedger for InMemoryStore {
    async fn completed_purchases(&self, competition_id: &str) -> Result<Vec<Purchase>> {
        Ok(self
            .purchases
            .read()
            .await
            .iter()
            .filter(|p| p.competition_id == competition_id && p.is_completed())
            .cloned()
            .collect())
    }
}
