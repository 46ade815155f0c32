use competition_fees::PlatformDefaults;
use fee_service::{
    Competition, FeeService, FeeServiceConfig, InMemoryStore, OrganizingTeam, Purchase,
    PurchaseStatus, RegistrationQuote,
};
use std::sync::Arc;

async fn service_with(store: InMemoryStore) -> (FeeService<InMemoryStore>, Arc<InMemoryStore>) {
    let store = Arc::new(store);
    let service = FeeService::new(store.clone(), &FeeServiceConfig::default());
    (service, store)
}

async fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store
        .insert_competition(Competition::new("comp-1", "Summer Throwdown", "team-1").with_default_fee(7500))
        .await;
    store.set_division_fee("comp-1", "teens", Some(0)).await;
    store
        .insert_team(OrganizingTeam {
            id: "team-1".to_string(),
            name: "Iron Box".to_string(),
            organizer_fee_percentage: None,
            organizer_fee_fixed: None,
        })
        .await;
    store
}

#[tokio::test]
async fn test_paid_quote_uses_default_policy() {
    let (service, _) = service_with(seeded_store().await).await;
    let quote = service.quote_registration("comp-1", "rx").await.unwrap();

    match quote {
        RegistrationQuote::Paid {
            breakdown,
            application_fee_cents,
        } => {
            assert_eq!(breakdown.platform_fee_cents, 388);
            assert_eq!(breakdown.total_charge_cents, 7888);
            assert_eq!(breakdown.stripe_fee_cents, 259);
            assert_eq!(breakdown.organizer_net_cents, 7241);
            assert_eq!(application_fee_cents, 7888 - 7241);
        }
        RegistrationQuote::Free => panic!("expected a paid quote"),
    }
}

#[tokio::test]
async fn test_free_division_skips_fees() {
    let (service, _) = service_with(seeded_store().await).await;
    let quote = service.quote_registration("comp-1", "teens").await.unwrap();

    assert!(quote.is_free());
    assert_eq!(quote.total_charge_cents(), 0);
}

#[tokio::test]
async fn test_founding_organizer_rate_applies() {
    let store = seeded_store().await;
    store
        .insert_team(OrganizingTeam {
            id: "team-1".to_string(),
            name: "Iron Box".to_string(),
            organizer_fee_percentage: Some(100),
            organizer_fee_fixed: Some(100),
        })
        .await;
    let (service, _) = service_with(store).await;

    let config = service.fee_config_for("comp-1").await.unwrap();
    assert_eq!(config.platform_percentage_basis_points, 100);
    assert_eq!(config.platform_fixed_cents, 100);

    let quote = service.quote_registration("comp-1", "rx").await.unwrap();
    let RegistrationQuote::Paid { breakdown, .. } = quote else {
        panic!("expected a paid quote");
    };
    // 7500 * 1% + 100
    assert_eq!(breakdown.platform_fee_cents, 175);
}

#[tokio::test]
async fn test_competition_override_beats_organizer_rate() {
    let store = seeded_store().await;
    let mut competition = Competition::new("comp-2", "Winter Games", "team-1").with_default_fee(5000);
    competition.platform_fee_percentage = Some(0);
    competition.platform_fee_fixed = Some(0);
    competition.pass_stripe_fees_to_customer = Some(true);
    store.insert_competition(competition).await;
    let (service, _) = service_with(store).await;

    let quote = service.quote_registration("comp-2", "rx").await.unwrap();
    let RegistrationQuote::Paid {
        breakdown,
        application_fee_cents,
    } = quote
    else {
        panic!("expected a paid quote");
    };

    assert_eq!(breakdown.platform_fee_cents, 0);
    assert_eq!(breakdown.organizer_net_cents, 5000);
    // (5000 + 30) / 0.971 = 5180.22
    assert_eq!(breakdown.total_charge_cents, 5181);
    assert_eq!(application_fee_cents, 181);
}

#[tokio::test]
async fn test_missing_team_uses_platform_defaults() {
    let store = InMemoryStore::new();
    store
        .insert_competition(Competition::new("comp-1", "Summer Throwdown", "ghost-team").with_default_fee(5000))
        .await;
    let (service, _) = service_with(store).await;

    let config = service.fee_config_for("comp-1").await.unwrap();
    assert_eq!(config.platform_percentage_basis_points, 250);
    assert_eq!(config.platform_fixed_cents, 200);
}

#[tokio::test]
async fn test_unknown_competition() {
    let (service, _) = service_with(seeded_store().await).await;

    assert!(service.quote_registration("nope", "rx").await.unwrap_err().is_not_found());
    assert!(service.fee_config_for("nope").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_configured_defaults_are_used() {
    let store = Arc::new(seeded_store().await);
    let config = FeeServiceConfig {
        platform_defaults: PlatformDefaults {
            platform_percentage_basis_points: 400,
            platform_fixed_cents: 200,
            ..PlatformDefaults::STANDARD
        },
        ..FeeServiceConfig::default()
    };
    let service = FeeService::new(store, &config);

    let quote = service.quote_registration("comp-1", "rx").await.unwrap();
    let RegistrationQuote::Paid { breakdown, .. } = quote else {
        panic!("expected a paid quote");
    };
    // 7500 * 4% + 200
    assert_eq!(breakdown.platform_fee_cents, 500);
    assert_eq!(breakdown.total_charge_cents, 8000);
    assert_eq!(breakdown.organizer_net_cents, 7238);
}

#[tokio::test]
async fn test_quoted_purchase_feeds_revenue_stats() {
    let (service, store) = service_with(seeded_store().await).await;
    store.insert_division("rx", "RX").await;

    for _ in 0..3 {
        let quote = service.quote_registration("comp-1", "rx").await.unwrap();
        let RegistrationQuote::Paid { breakdown, .. } = quote else {
            panic!("expected a paid quote");
        };
        store
            .record_purchase(Purchase::from_breakdown("comp-1", Some("rx"), PurchaseStatus::Completed, &breakdown))
            .await;
    }

    let stats = service.revenue_stats("comp-1").await.unwrap();
    assert_eq!(stats.purchase_count, 3);
    assert_eq!(stats.total_gross_cents, 7888 * 3);
    assert_eq!(stats.total_organizer_net_cents, 7241 * 3);
    assert_eq!(stats.by_division[0].registration_fee_cents, 7500);
}

#[tokio::test]
async fn test_quote_serializes_with_kind_tag() {
    let (service, _) = service_with(seeded_store().await).await;

    let free = serde_json::to_value(service.quote_registration("comp-1", "teens").await.unwrap()).unwrap();
    assert_eq!(free["kind"], "free");

    let paid = serde_json::to_value(service.quote_registration("comp-1", "rx").await.unwrap()).unwrap();
    assert_eq!(paid["kind"], "paid");
    assert_eq!(paid["breakdown"]["total_charge_cents"], 7888);
}
