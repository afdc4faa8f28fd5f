//! Prometheus counters for quotes and rate card swaps
use ongkir_core::{ShippingError, ShippingQuote};
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    quotes: IntCounterVec,
    rate_card_swaps: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let quotes = IntCounterVec::new(
            Opts::new("ongkir_quotes_total", "Shipping quotes by outcome"),
            &["outcome"],
        )?;
        let rate_card_swaps = IntCounter::new(
            "ongkir_rate_card_swaps_total",
            "Rate cards installed at runtime",
        )?;
        registry.register(Box::new(quotes.clone()))?;
        registry.register(Box::new(rate_card_swaps.clone()))?;

        Ok(Self {
            registry,
            quotes,
            rate_card_swaps,
        })
    }

    pub fn record_quote(&self, result: &Result<ShippingQuote, ShippingError>) {
        self.quotes.with_label_values(&[outcome(result)]).inc();
    }

    pub fn record_swap(&self) {
        self.rate_card_swaps.inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

fn outcome(result: &Result<ShippingQuote, ShippingError>) -> &'static str {
    match result {
        Ok(quote) if quote.is_empty() => "empty",
        Ok(_) => "ok",
        Err(ShippingError::InvalidWeight { .. }) => "invalid_weight",
        Err(ShippingError::UnknownDestination(_)) => "unknown_destination",
        Err(_) => "error",
    }
}
