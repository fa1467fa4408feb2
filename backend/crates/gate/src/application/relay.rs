//! Session Relay Use Case
//!
//! Login, refresh and logout for one role. The backend issues tokens; this
//! layer only moves them into (or out of) the browser's cookies.

use axum::body::Bytes;
use http::{HeaderMap, HeaderValue};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::session::SessionCookieStore;
use crate::domain::backend::{BackendReply, IdentityBackend};
use crate::domain::entity::zone::Zone;
use crate::domain::value_object::role::Role;
use crate::error::{GateError, GateResult};

/// Login output
pub struct LoginOutput {
    /// Backend answer with token fields removed from its body
    pub reply: BackendReply,
    /// Set-Cookie values; empty unless the backend issued tokens
    pub cookies: Vec<HeaderValue>,
}

/// Refresh result
#[derive(Debug)]
pub enum RefreshOutcome {
    /// New pair installed
    Renewed { cookies: Vec<HeaderValue> },
    /// Backend refused; cookies are cleared
    Rejected { cookies: Vec<HeaderValue> },
}

pub struct SessionRelayUseCase<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    backend: Arc<B>,
    store: SessionCookieStore,
}

impl<B> SessionRelayUseCase<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    pub fn new(backend: Arc<B>, config: Arc<GateConfig>) -> Self {
        Self {
            backend,
            store: SessionCookieStore::new(config),
        }
    }

    pub async fn login(&self, zone: &Zone, body: Bytes) -> GateResult<LoginOutput> {
        let reply = self.backend.login(zone, body).await?.without_token_fields();

        let cookies = match (&reply.credential, reply.is_success()) {
            (Some(credential), true) => self.store.establish(credential),
            (None, true) => {
                tracing::warn!(role = %zone.role, "Backend accepted login without a token pair");
                Vec::new()
            }
            _ => {
                tracing::warn!(role = %zone.role, status = %reply.status, "Login refused upstream");
                Vec::new()
            }
        };

        Ok(LoginOutput { reply, cookies })
    }

    /// Replace the role's credential wholesale
    ///
    /// A reply without a new refresh token keeps the one just used.
    pub async fn refresh(&self, zone: &Zone, headers: &HeaderMap) -> GateResult<RefreshOutcome> {
        let current = self.store.read(headers, zone.role);
        let refresh_token = current.refresh_token().ok_or(GateError::MissingToken)?;

        let reply = self.backend.refresh(zone, refresh_token).await?;

        match reply.credential {
            Some(renewed) if reply.status.is_success() => {
                let renewed = if renewed.refresh_token.is_some() {
                    renewed
                } else {
                    renewed.with_refresh_token(refresh_token)
                };
                Ok(RefreshOutcome::Renewed {
                    cookies: self.store.establish(&renewed),
                })
            }
            _ => {
                tracing::warn!(role = %zone.role, status = %reply.status, "Refresh refused upstream");
                Ok(RefreshOutcome::Rejected {
                    cookies: self.store.clear(zone.role),
                })
            }
        }
    }

    /// Logout never calls the backend
    pub fn logout(&self, role: Role) -> Vec<HeaderValue> {
        self.store.clear(role)
    }
}
