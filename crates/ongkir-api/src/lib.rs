//! Ongkir API /v1: REST endpoints over the shipping engine
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post, put},
    Router,
};
use config::ApiConfig;
use metrics::Metrics;
use ongkir_engine::ShippingEngine;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ShippingEngine>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(engine: ShippingEngine) -> Result<Self, prometheus::Error> {
        Ok(Self {
            engine: Arc::new(engine),
            metrics: Metrics::new()?,
        })
    }
}

/// Public routes, plus `PUT /v1/rate-card` when `admin` is set.
pub fn create_app(state: AppState, admin: bool) -> Router {
    let mut router = Router::new()
        .route("/v1/shipping/quote", post(handlers::quote))
        .route("/v1/destinations", get(handlers::list_destinations))
        .route("/v1/couriers", get(handlers::list_couriers))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics));
    if admin {
        router = router.route("/v1/rate-card", put(handlers::replace_rate_card));
    }

    router
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let card = config.load_rate_card()?;
    let engine = ShippingEngine::new(card)?;
    let app = create_app(AppState::new(engine)?, config.admin);
    if config.admin {
        tracing::warn!("rate card replacement enabled at PUT /v1/rate-card");
    }

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("Ongkir API listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
