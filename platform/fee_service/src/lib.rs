//! Competition fee service
//!
//! Resolves registration fees from competition and division settings, prices
//! registrations with the `competition_fees` engine, and reports revenue over
//! completed purchases. Storage is reached only through the traits in
//! [`store`].

pub mod config;
pub mod error;
pub mod models;
pub mod resolution;
pub mod revenue;
pub mod service;
pub mod store;
pub mod tracing_logger;

pub use config::{ConfigError, FeeServiceConfig};
pub use error::{FeeServiceError, Result};
pub use models::{Competition, Division, DivisionFee, OrganizingTeam, Purchase, PurchaseStatus};
pub use resolution::get_registration_fee;
pub use revenue::{get_competition_revenue_stats, CompetitionRevenueStats, DivisionRevenue};
pub use service::{FeeService, RegistrationQuote};
pub use store::{CompetitionStore, InMemoryStore, PurchaseLedger};
