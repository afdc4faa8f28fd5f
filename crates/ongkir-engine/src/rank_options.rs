use crate::state::QuoteState;
use ongkir_core::{QuoteContext, ShippingError, ShippingQuote, Stage};
use ongkir_rates::ranker;

/// Sorts the priced options and assembles the final quote.
#[derive(Default)]
pub struct RankOptionsStage;

impl Stage<QuoteState> for RankOptionsStage {
    fn id(&self) -> &'static str {
        "rank.sort.v1"
    }

    fn run(&self, mut state: QuoteState, _ctx: &QuoteContext) -> Result<QuoteState, ShippingError> {
        let zone = state.zone(self.id())?;
        let weight = state.weight(self.id())?;
        let needs_cargo = state.eligibility(self.id())?.needs_cargo;

        let options = ranker::rank(std::mem::take(&mut state.priced), needs_cargo);

        state.quote = Some(ShippingQuote {
            destination: state.request.destination.clone(),
            zone: zone.zone,
            distance_km: zone.distance_km,
            weight_in_kg: weight.kg,
            needs_cargo,
            options,
        });
        Ok(state)
    }
}
