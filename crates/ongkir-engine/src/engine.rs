//! ShippingEngine: the only entry point the rest of the shop calls
use crate::filter_couriers::FilterCouriersStage;
use crate::normalize_weight::NormalizeWeightStage;
use crate::price_options::PriceOptionsStage;
use crate::rank_options::RankOptionsStage;
use crate::resolve_zone::ResolveZoneStage;
use crate::state::QuoteState;
use crate::validate_request::ValidateRequestStage;
use ongkir_core::{
    fingerprint, PipelineRunner, QuoteContext, ShippingError, ShippingQuote, ShippingRequest,
    StageProof,
};
use ongkir_rates::{RateCard, RateCardError, RateCardStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A quote plus how it was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub quote: ShippingQuote,
    pub pipeline_id: String,
    pub stages: Vec<StageProof>,
    /// `blake3:<hex>` of the quote's JSON. Same request, same rate card,
    /// same fingerprint.
    pub fingerprint: String,
}

/// Stateless apart from the rate card store. Safe to share across threads.
pub struct ShippingEngine {
    store: Arc<RateCardStore>,
    runner: PipelineRunner<QuoteState>,
}

impl ShippingEngine {
    /// Engine over a caller-supplied card, validated up front.
    pub fn new(card: RateCard) -> Result<Self, RateCardError> {
        Ok(Self::with_store(Arc::new(RateCardStore::new(card)?)))
    }

    pub fn standard() -> Self {
        Self::with_store(Arc::new(RateCardStore::standard()))
    }

    pub fn with_store(store: Arc<RateCardStore>) -> Self {
        Self {
            store,
            runner: PipelineRunner::new(vec![
                Box::new(ValidateRequestStage),
                Box::new(ResolveZoneStage),
                Box::new(NormalizeWeightStage),
                Box::new(FilterCouriersStage),
                Box::new(PriceOptionsStage),
                Box::new(RankOptionsStage),
            ]),
        }
    }

    pub fn store(&self) -> &Arc<RateCardStore> {
        &self.store
    }

    pub fn rate_card(&self) -> Arc<RateCard> {
        self.store.snapshot()
    }

    pub fn pipeline_id(&self) -> &str {
        self.runner.pipeline_id()
    }

    /// Price a parcel for a destination. An empty `options` list is a valid
    /// answer ("no courier available"), not an error.
    pub fn calculate_shipping(
        &self,
        request: &ShippingRequest,
    ) -> Result<ShippingQuote, ShippingError> {
        self.quote(request, &QuoteContext::default())
            .map(|report| report.quote)
    }

    pub fn quote(
        &self,
        request: &ShippingRequest,
        ctx: &QuoteContext,
    ) -> Result<QuoteReport, ShippingError> {
        let span = tracing::info_span!(
            "quote",
            trace_id = %ctx.trace_id,
            channel = %ctx.channel,
            destination = %request.destination,
            received_at = %ctx.received_at,
        );
        let _guard = span.enter();

        let state = QuoteState::new(self.store.snapshot(), request.clone());
        let (state, stages) = self.runner.run(state, ctx)?;

        let quote = state
            .quote
            .ok_or_else(|| ShippingError::stage("engine", "pipeline produced no quote"))?;
        let fingerprint = fingerprint(&quote)
            .map_err(|e| ShippingError::stage("engine", format!("quote not serializable: {e}")))?;

        tracing::info!(
            weight_in_kg = quote.weight_in_kg,
            needs_cargo = quote.needs_cargo,
            options = quote.options.len(),
            %fingerprint,
            "shipping quote computed"
        );

        Ok(QuoteReport {
            quote,
            pipeline_id: self.runner.pipeline_id().to_string(),
            stages,
            fingerprint,
        })
    }
}

impl Default for ShippingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
