use crate::state::QuoteState;
use ongkir_core::{QuoteContext, ShippingError, Stage};

/// Rejects malformed requests before any lookup or pricing happens.
#[derive(Default)]
pub struct ValidateRequestStage;

impl Stage<QuoteState> for ValidateRequestStage {
    fn id(&self) -> &'static str {
        "validate.request.v1"
    }

    fn run(&self, state: QuoteState, _ctx: &QuoteContext) -> Result<QuoteState, ShippingError> {
        let grams = state.request.total_weight_grams;
        if grams <= 0 {
            return Err(ShippingError::invalid_weight(grams, "parcel weight must be positive"));
        }
        if state.request.destination.is_empty() {
            return Err(ShippingError::UnknownDestination(String::new()));
        }
        Ok(state)
    }
}
