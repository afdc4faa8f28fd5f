//! Ongkir Rates: zone table, rate catalog, and the pricing rules
//!
//! # Architecture
//!
//! ```text
//! destination ──► ZoneTable ──► ZoneInfo ─┐
//!                                         ├─► Eligibility ──► Cost ──► Rank
//! grams ──────► Weight Normalizer ──► kg ─┘        ▲
//!                                                  │
//!                                      RateCatalog + EligibilityPolicy
//! ```
//!
//! The zone table, catalog, and policy thresholds travel together as one
//! immutable [`RateCard`]. The engine receives it explicitly; nothing in
//! this crate reads global state.
//!
//! # Example
//!
//! ```
//! use ongkir_rates::{RateCard, eligibility, cost, ranker, weight};
//!
//! let card = RateCard::standard();
//! let zone = card.resolve("Bogor").unwrap();
//! let weight = weight::billable_weight(8_200).unwrap();
//!
//! let eligibility = eligibility::filter(&zone, &weight, &card);
//! let options = eligibility
//!     .eligible
//!     .iter()
//!     .map(|entry| cost::price(entry, &zone, weight.kg, &card.policy))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let ranked = ranker::rank(options, eligibility.needs_cargo);
//! assert!(ranked.windows(2).all(|w| w[0].cost <= w[1].cost));
//! ```

pub mod catalog;
pub mod cost;
pub mod eligibility;
pub mod error;
pub mod policy;
pub mod ranker;
pub mod rate_card;
pub mod store;
pub mod weight;
pub mod zone;

pub use catalog::{CourierDefinition, CourierService, RateCatalog, ZoneRate};
pub use eligibility::{EligibleEntry, Eligibility, EligibilityRule, Exclusion};
pub use error::RateCardError;
pub use policy::EligibilityPolicy;
pub use rate_card::RateCard;
pub use store::RateCardStore;
pub use zone::{ZoneEntry, ZoneTable};
