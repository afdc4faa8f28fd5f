use crate::state::QuoteState;
use ongkir_core::{QuoteContext, ShippingError, Stage};
use ongkir_rates::eligibility;

#[derive(Default)]
pub struct FilterCouriersStage;

impl Stage<QuoteState> for FilterCouriersStage {
    fn id(&self) -> &'static str {
        "eligibility.filter.v1"
    }

    fn run(&self, mut state: QuoteState, _ctx: &QuoteContext) -> Result<QuoteState, ShippingError> {
        let zone = state.zone(self.id())?;
        let weight = state.weight(self.id())?;

        let result = eligibility::filter(&zone, &weight, &state.rate_card);
        tracing::debug!(
            needs_cargo = result.needs_cargo,
            eligible = result.eligible.len(),
            excluded = result.exclusions.len(),
            "couriers filtered"
        );
        state.eligibility = Some(result);
        Ok(state)
    }
}
