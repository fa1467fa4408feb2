//! HTTP Handlers
//!
//! Session relay endpoints under `/session/{role}` and the origin fallback.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::{RefreshOutcome, SessionCookieStore, SessionRelayUseCase, VerifyCredentialUseCase};
use crate::domain::backend::IdentityBackend;
use crate::domain::entity::zone::Zone;
use crate::domain::value_object::role::Role;
use crate::error::{GateError, GateResult};
use crate::infra::origin::OriginProxy;
use crate::presentation::dto::SessionStatusResponse;

/// Shared state for gate handlers
#[derive(Clone)]
pub struct GateAppState<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    pub backend: Arc<B>,
    pub origin: Arc<OriginProxy>,
    pub config: Arc<GateConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /session/{role}/login
pub async fn login<B>(
    State(state): State<GateAppState<B>>,
    Path(role): Path<String>,
    body: Bytes,
) -> GateResult<Response>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    let zone = resolve_zone(&state.config, &role)?;

    let use_case = SessionRelayUseCase::new(state.backend.clone(), state.config.clone());
    let output = use_case.login(zone, body).await?;

    let mut response = Response::new(Body::from(output.reply.body));
    *response.status_mut() = output.reply.status;

    let headers = response.headers_mut();
    if let Some(content_type) = output.reply.content_type {
        headers.insert(header::CONTENT_TYPE, content_type);
    }
    append_cookies(headers, output.cookies);

    Ok(response)
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /session/{role}/refresh
pub async fn refresh<B>(
    State(state): State<GateAppState<B>>,
    Path(role): Path<String>,
    headers: HeaderMap,
) -> GateResult<Response>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    let zone = resolve_zone(&state.config, &role)?;

    let use_case = SessionRelayUseCase::new(state.backend.clone(), state.config.clone());

    let response = match use_case.refresh(zone, &headers).await? {
        RefreshOutcome::Renewed { cookies } => {
            let mut response = StatusCode::NO_CONTENT.into_response();
            append_cookies(response.headers_mut(), cookies);
            response
        }
        RefreshOutcome::Rejected { cookies } => {
            let mut response = AppError::unauthorized("Session expired")
                .with_action("Please sign in again")
                .into_response();
            append_cookies(response.headers_mut(), cookies);
            response
        }
    };

    Ok(response)
}

// ============================================================================
// Logout
// ============================================================================

/// POST /session/{role}/logout
pub async fn logout<B>(
    State(state): State<GateAppState<B>>,
    Path(role): Path<String>,
) -> GateResult<Response>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    let zone = resolve_zone(&state.config, &role)?;

    let use_case = SessionRelayUseCase::new(state.backend.clone(), state.config.clone());
    let cookies = use_case.logout(zone.role);

    let mut response = StatusCode::NO_CONTENT.into_response();
    append_cookies(response.headers_mut(), cookies);

    Ok(response)
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /session/{role}/status
pub async fn session_status<B>(
    State(state): State<GateAppState<B>>,
    Path(role): Path<String>,
    headers: HeaderMap,
) -> GateResult<Json<SessionStatusResponse>>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    let zone = resolve_zone(&state.config, &role)?;

    let credential = SessionCookieStore::new(state.config.clone()).read(&headers, zone.role);
    let verification = VerifyCredentialUseCase::new(state.backend.clone())
        .execute(zone, &credential)
        .await?;

    Ok(Json(SessionStatusResponse {
        authenticated: verification.ok,
        role: zone.role,
    }))
}

// ============================================================================
// Origin
// ============================================================================

/// Fallback: everything else goes to the origin
pub async fn forward<B>(State(state): State<GateAppState<B>>, req: Request) -> GateResult<Response>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    state.origin.forward(req).await
}

// ============================================================================
// Helper Functions
// ============================================================================

fn resolve_zone<'a>(config: &'a GateConfig, role: &str) -> GateResult<&'a Zone> {
    let role: Role = role.parse()?;
    config
        .zones
        .for_role(role)
        .ok_or_else(|| GateError::InvalidRole(role.to_string()))
}

fn append_cookies(headers: &mut HeaderMap, cookies: Vec<HeaderValue>) {
    for cookie in cookies {
        headers.append(header::SET_COOKIE, cookie);
    }
}
