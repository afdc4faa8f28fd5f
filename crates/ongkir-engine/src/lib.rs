//! Ongkir Engine: the shipping quote pipeline and its facade
//!
//! # Pipeline Flow
//!
//! ```text
//! Request → Validate → Resolve Zone → Normalize Weight → Filter → Cost → Rank → Quote
//!             ↓            ↓                 ↓              ↓        ↓       ↓
//!        InvalidWeight  UnknownDest     BillableWeight  Eligibility Priced  Ranked
//! ```
//!
//! Any stage may end the run with an error; nothing partial is returned.
//!
//! # Example
//!
//! ```
//! use ongkir_core::ShippingRequest;
//! use ongkir_engine::ShippingEngine;
//!
//! let engine = ShippingEngine::standard();
//! let quote = engine
//!     .calculate_shipping(&ShippingRequest::new("Tangerang", 25_000))
//!     .unwrap();
//!
//! assert!(quote.needs_cargo);
//! assert_eq!(quote.recommended().unwrap().cost, 600_000);
//! ```

mod engine;
mod filter_couriers;
mod normalize_weight;
mod price_options;
mod rank_options;
mod resolve_zone;
mod state;
mod validate_request;

pub use engine::{QuoteReport, ShippingEngine};
pub use filter_couriers::FilterCouriersStage;
pub use normalize_weight::NormalizeWeightStage;
pub use price_options::PriceOptionsStage;
pub use rank_options::RankOptionsStage;
pub use resolve_zone::ResolveZoneStage;
pub use state::QuoteState;
pub use validate_request::ValidateRequestStage;
