use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::refresh::refresh;
use crate::auth::clock::SystemClock;
use crate::auth::service::AuthService;
use crate::outbound::InMemoryRefreshTokenStore;
use crate::outbound::InMemoryUserDirectory;

/// Service wired with the reference in-memory adapters.
pub type AppAuthService =
    AuthService<InMemoryUserDirectory, InMemoryRefreshTokenStore, SystemClock>;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AppAuthService>,
}

pub fn create_router(auth_service: Arc<AppAuthService>) -> Router {
    let state = AppState { auth_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
