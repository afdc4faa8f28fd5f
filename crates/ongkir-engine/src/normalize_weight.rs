use crate::state::QuoteState;
use ongkir_core::{QuoteContext, ShippingError, Stage};
use ongkir_rates::weight;

#[derive(Default)]
pub struct NormalizeWeightStage;

impl Stage<QuoteState> for NormalizeWeightStage {
    fn id(&self) -> &'static str {
        "weight.normalize.v1"
    }

    fn run(&self, mut state: QuoteState, _ctx: &QuoteContext) -> Result<QuoteState, ShippingError> {
        state.weight = Some(weight::billable_weight(state.request.total_weight_grams)?);
        Ok(state)
    }
}
