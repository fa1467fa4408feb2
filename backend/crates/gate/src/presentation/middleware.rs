//! Gate Middleware
//!
//! Runs the gate decision in front of every route of a router.

use axum::Router;
use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderValue, Request};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{IntoResponse, Redirect, Response};
use platform::client::extract_client_ip;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Instrument;

use crate::application::config::{GateConfig, MARKER_VALUE};
use crate::application::gate::{GateDecision, GateUseCase};
use crate::domain::backend::IdentityBackend;
use crate::domain::value_object::role::Role;

/// Middleware state
#[derive(Clone)]
pub struct GateMiddlewareState<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    pub backend: Arc<B>,
    pub config: Arc<GateConfig>,
}

/// Zone that admitted the request, stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSession {
    pub role: Role,
}

/// Wrap every route (and the fallback) of `router` with the gate
pub fn protect<B, S>(router: Router<S>, backend: Arc<B>, config: Arc<GateConfig>) -> Router<S>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    let state = GateMiddlewareState { backend, config };
    router.layer(from_fn_with_state(state, require_zone_session::<B>))
}

/// Middleware that requires the zone's session on protected paths
///
/// - public path: passed through untouched, no backend call
/// - accepted: forwarded with the marker header on request and response
/// - refused: 307 to the zone's login page, the inner service never runs
/// - backend unreachable: 500 JSON error
pub async fn require_zone_session<B>(
    State(state): State<GateMiddlewareState<B>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    let path = req.uri().path().to_owned();

    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client_ip = extract_client_ip(req.headers(), direct_ip);

    let span = tracing::info_span!(
        "gate",
        path = %path,
        client_ip = ?client_ip,
    );

    async move {
        let use_case = GateUseCase::new(state.backend.clone(), state.config.clone());

        // Body stays out of the awaited borrow; only the headers are needed
        let (mut parts, body) = req.into_parts();
        let decision = use_case.decide(&path, &parts.headers).await;

        match decision {
            Ok(GateDecision::Public) => next.run(Request::from_parts(parts, body)).await,
            Ok(GateDecision::Authorized { role }) => {
                let marker = state.config.marker_header.clone();

                parts
                    .headers
                    .insert(marker.clone(), HeaderValue::from_static(MARKER_VALUE));
                parts.extensions.insert(ZoneSession { role });
                let req = Request::from_parts(parts, body);

                let mut response = next.run(req).await;
                response
                    .headers_mut()
                    .insert(marker, HeaderValue::from_static(MARKER_VALUE));
                response
            }
            Ok(GateDecision::Rejected { role, login_path }) => {
                tracing::debug!(role = %role, login_path = %login_path, "Session refused, redirecting");
                Redirect::temporary(&login_path).into_response()
            }
            Err(e) => e.into_response(),
        }
    }
    .instrument(span)
    .await
}
