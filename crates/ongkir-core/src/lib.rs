//! Ongkir Core: data model, error taxonomy, and the stage pipeline
//!
//! Everything in here is a value object or a pure abstraction. Pricing
//! rules live in `ongkir-rates`; the concrete pipeline lives in
//! `ongkir-engine`.

pub mod context;
pub mod data_model;
pub mod error;
pub mod runner;
pub mod stage;

pub use context::QuoteContext;
pub use data_model::{
    BillableWeight, DeliveryEstimate, ParcelItem, ServiceType, ShippingOption, ShippingQuote,
    ShippingRequest, ZoneInfo,
};
pub use error::{ShippingError, ShippingResult};
pub use runner::{fingerprint, PipelineRunner, StageProof};
pub use stage::Stage;

/// Engine version reported by the HTTP health endpoint
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
