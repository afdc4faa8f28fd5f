use crate::state::QuoteState;
use ongkir_core::{QuoteContext, ShippingError, Stage};

#[derive(Default)]
pub struct ResolveZoneStage;

impl Stage<QuoteState> for ResolveZoneStage {
    fn id(&self) -> &'static str {
        "zone.resolve.v1"
    }

    fn run(&self, mut state: QuoteState, _ctx: &QuoteContext) -> Result<QuoteState, ShippingError> {
        let zone = state.rate_card.resolve(&state.request.destination)?;
        tracing::debug!(
            destination = %state.request.destination,
            zone = zone.zone,
            distance_km = zone.distance_km,
            "destination resolved"
        );
        state.zone = Some(zone);
        Ok(state)
    }
}
