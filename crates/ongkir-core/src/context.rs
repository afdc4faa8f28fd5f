//! Quote Context: per-call metadata that travels through the pipeline
//!
//! Nothing in here influences pricing. It exists for tracing and audit.
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct QuoteContext {
    pub trace_id: String,
    /// Calling workflow (checkout, order, pos, ...)
    pub channel: String,
    /// When the caller asked for the quote; recorded on the quote span
    pub received_at: DateTime<Utc>,
}

impl QuoteContext {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            channel: channel.into(),
            received_at: Utc::now(),
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }

    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }
}

impl Default for QuoteContext {
    fn default() -> Self {
        Self::new("checkout")
    }
}
