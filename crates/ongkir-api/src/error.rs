//! Mapping engine errors onto HTTP responses
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ongkir_core::ShippingError;
use ongkir_rates::RateCardError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Shipping(#[from] ShippingError),

    #[error(transparent)]
    RateCard(#[from] RateCardError),

    /// Body is not a well-formed quote request
    #[error("REQUEST/{0}")]
    InvalidRequest(String),

    #[error("metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // Form-validation class: the customer picks another destination
            // or fixes the cart.
            ApiError::Shipping(e) if e.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Shipping(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RateCard(_) => StatusCode::BAD_REQUEST,
            ApiError::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Shipping(e) => e.kind(),
            ApiError::InvalidRequest(_) => "InvalidRequest",
            ApiError::RateCard(_) => "RateCard",
            ApiError::Metrics(_) => "Metrics",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({ "kind": self.kind(), "message": self.to_string() }));
        (status, body).into_response()
    }
}
