use crate::state::QuoteState;
use ongkir_core::{QuoteContext, ShippingError, Stage};
use ongkir_rates::cost;

#[derive(Default)]
pub struct PriceOptionsStage;

impl Stage<QuoteState> for PriceOptionsStage {
    fn id(&self) -> &'static str {
        "cost.price.v1"
    }

    fn run(&self, mut state: QuoteState, _ctx: &QuoteContext) -> Result<QuoteState, ShippingError> {
        let zone = state.zone(self.id())?;
        let weight = state.weight(self.id())?;
        let policy = state.rate_card.policy;

        let priced = state
            .eligibility(self.id())?
            .eligible
            .iter()
            .map(|entry| cost::price(entry, &zone, weight.kg, &policy))
            .collect::<Result<Vec<_>, _>>()?;

        state.priced = priced;
        Ok(state)
    }
}
