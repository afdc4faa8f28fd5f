//! Span fields a log pipeline can filter quotes on.

use chrono::{DateTime, Utc};
use ongkir_core::{QuoteContext, ShippingRequest};
use ongkir_engine::ShippingEngine;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// (span name, field, value) for every span opened
#[derive(Clone, Default)]
struct SpanFields(Arc<Mutex<Vec<(String, String, String)>>>);

impl SpanFields {
    fn value(&self, span: &str, field: &str) -> Option<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .find(|(s, f, _)| s == span && f == field)
            .map(|(_, _, v)| v.clone())
    }
}

impl<S: Subscriber> Layer<S> for SpanFields {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor {
            span: attrs.metadata().name(),
            fields: Vec::new(),
        };
        attrs.record(&mut visitor);
        self.0.lock().unwrap().extend(visitor.fields);
    }
}

struct FieldVisitor {
    span: &'static str,
    fields: Vec<(String, String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields.push((
            self.span.to_string(),
            field.name().to_string(),
            format!("{:?}", value),
        ));
    }
}

#[test]
fn test_quote_span_carries_request_fields() {
    let fields = SpanFields::default();
    let subscriber = tracing_subscriber::registry().with(fields.clone());

    let received_at = DateTime::parse_from_rfc3339("2026-03-01T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let ctx = QuoteContext::new("pos")
        .with_trace_id("order-1234")
        .with_received_at(received_at);

    tracing::subscriber::with_default(subscriber, || {
        ShippingEngine::standard()
            .quote(&ShippingRequest::new("Depok", 1000), &ctx)
            .unwrap();
    });

    assert_eq!(fields.value("quote", "destination").as_deref(), Some("Depok"));
    assert_eq!(fields.value("quote", "trace_id").as_deref(), Some("order-1234"));
    assert_eq!(fields.value("quote", "channel").as_deref(), Some("pos"));
    assert_eq!(
        fields.value("quote", "received_at"),
        Some(received_at.to_string())
    );
    assert_eq!(
        fields.value("pipeline", "pipeline").as_deref(),
        Some("validate→zone→weight→eligibility→cost→rank")
    );
}
