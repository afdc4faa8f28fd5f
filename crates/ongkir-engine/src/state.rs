//! Working state threaded through the quote pipeline
use ongkir_core::{
    BillableWeight, ShippingError, ShippingOption, ShippingQuote, ShippingRequest, ZoneInfo,
};
use ongkir_rates::{Eligibility, RateCard};
use serde::Serialize;
use std::sync::Arc;

/// Each stage fills in one more field. The rate card is the snapshot taken
/// when the call started and stays fixed for the whole run.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteState {
    #[serde(skip)]
    pub rate_card: Arc<RateCard>,
    pub request: ShippingRequest,
    pub zone: Option<ZoneInfo>,
    pub weight: Option<BillableWeight>,
    pub eligibility: Option<Eligibility>,
    pub priced: Vec<ShippingOption>,
    pub quote: Option<ShippingQuote>,
}

impl QuoteState {
    pub fn new(rate_card: Arc<RateCard>, request: ShippingRequest) -> Self {
        Self {
            rate_card,
            request,
            zone: None,
            weight: None,
            eligibility: None,
            priced: Vec::new(),
            quote: None,
        }
    }

    pub(crate) fn zone(&self, stage: &str) -> Result<ZoneInfo, ShippingError> {
        self.zone
            .ok_or_else(|| ShippingError::stage(stage, "zone not resolved"))
    }

    pub(crate) fn weight(&self, stage: &str) -> Result<BillableWeight, ShippingError> {
        self.weight
            .ok_or_else(|| ShippingError::stage(stage, "weight not normalized"))
    }

    pub(crate) fn eligibility(&self, stage: &str) -> Result<&Eligibility, ShippingError> {
        self.eligibility
            .as_ref()
            .ok_or_else(|| ShippingError::stage(stage, "eligibility not filtered"))
    }
}
