//! API Handlers
use crate::error::ApiError;
use crate::middleware::RequestId;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use ongkir_core::{ParcelItem, QuoteContext, ShippingError, ShippingRequest, ENGINE_VERSION};
use ongkir_rates::RateCard;
use serde::Deserialize;
use serde_json::{json, Value};

pub const FINGERPRINT_HEADER: &str = "x-quote-fingerprint";

/// Either a precomputed total or the cart lines to sum, never both.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBody {
    pub destination: String,
    #[serde(default)]
    pub total_weight_grams: Option<i64>,
    #[serde(default)]
    pub items: Option<Vec<ParcelItem>>,
    #[serde(default)]
    pub channel: Option<String>,
}

impl QuoteBody {
    fn check_shape(&self) -> Result<(), ApiError> {
        if self.items.is_some() && self.total_weight_grams.is_some() {
            return Err(ApiError::InvalidRequest(
                "send either totalWeightGrams or items, not both".to_string(),
            ));
        }
        Ok(())
    }

    fn into_request(self) -> Result<ShippingRequest, ShippingError> {
        match (self.items, self.total_weight_grams) {
            (Some(items), _) => ShippingRequest::from_items(self.destination, &items),
            (None, Some(grams)) => Ok(ShippingRequest::new(self.destination, grams)),
            (None, None) => Err(ShippingError::invalid_weight(
                0,
                "either totalWeightGrams or items is required",
            )),
        }
    }
}

pub async fn quote(
    State(state): State<AppState>,
    Extension(RequestId(trace_id)): Extension<RequestId>,
    body: Result<Json<QuoteBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    body.check_shape()?;

    let channel = body.channel.clone().unwrap_or_else(|| "checkout".to_string());
    let ctx = QuoteContext::new(channel).with_trace_id(trace_id);

    let result = body
        .into_request()
        .and_then(|request| state.engine.quote(&request, &ctx));

    let (quote_result, fingerprint) = match result {
        Ok(report) => (Ok(report.quote), Some(report.fingerprint)),
        Err(e) => (Err(e), None),
    };
    state.metrics.record_quote(&quote_result);
    let quote = quote_result?;

    let mut headers = HeaderMap::new();
    if let Some(value) = fingerprint.and_then(|f| HeaderValue::from_str(&f).ok()) {
        headers.insert(FINGERPRINT_HEADER, value);
    }
    Ok((StatusCode::OK, headers, Json(quote)))
}

pub async fn list_destinations(State(state): State<AppState>) -> Json<Value> {
    let card = state.engine.rate_card();
    let destinations: Vec<Value> = card
        .zones
        .entries()
        .iter()
        .map(|e| json!({ "destination": e.destination, "zone": e.zone, "distanceKm": e.distance_km }))
        .collect();
    Json(Value::Array(destinations))
}

pub async fn list_couriers(State(state): State<AppState>) -> Json<Value> {
    let card = state.engine.rate_card();
    let couriers: Vec<Value> = card
        .couriers
        .iter()
        .map(|c| {
            json!({
                "courier": c.name,
                "serviceType": c.service_type(),
                "estimatedDelivery": c.estimated_delivery.label,
            })
        })
        .collect();
    Json(Value::Array(couriers))
}

/// Replace the live rate card with the YAML body.
pub async fn replace_rate_card(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let card = RateCard::from_yaml_str(&body)?;
    let destinations = card.zones.len();
    let couriers = card.couriers.len();
    let generation = state.engine.store().replace(card)?;
    state.metrics.record_swap();

    Ok(Json(json!({
        "generation": generation,
        "destinations": destinations,
        "couriers": couriers,
    })))
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "version": ENGINE_VERSION })))
}

pub async fn metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(state.metrics.encode()?)
}
