//! Gate Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::backend::IdentityBackend;
use crate::infra::origin::OriginProxy;
use crate::infra::rest::HttpIdentityBackend;
use crate::presentation::handlers::{self, GateAppState};
use crate::presentation::middleware::protect;

/// Create the gate router backed by the HTTP identity backend
pub fn gate_router(backend: HttpIdentityBackend, origin: OriginProxy, config: GateConfig) -> Router {
    gate_router_generic(backend, origin, config)
}

/// Create a gate router for any identity backend implementation
///
/// Session endpoints live under `/session/{role}`; every other path is
/// forwarded to the origin. The gate wraps both.
pub fn gate_router_generic<B>(backend: B, origin: OriginProxy, config: GateConfig) -> Router
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    let state = GateAppState {
        backend: Arc::new(backend),
        origin: Arc::new(origin),
        config: Arc::new(config),
    };

    let router = Router::new()
        .route("/session/{role}/login", post(handlers::login::<B>))
        .route("/session/{role}/refresh", post(handlers::refresh::<B>))
        .route("/session/{role}/logout", post(handlers::logout::<B>))
        .route("/session/{role}/status", get(handlers::session_status::<B>))
        .fallback(handlers::forward::<B>);

    protect(router, state.backend.clone(), state.config.clone()).with_state(state)
}
