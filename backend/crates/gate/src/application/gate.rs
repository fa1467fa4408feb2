//! Gate Use Case
//!
//! One generic state machine for every zone:
//! Public → pass, Pending → verify → Authorized | Rejected, or an error.

use http::HeaderMap;
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::session::SessionCookieStore;
use crate::application::verify::VerifyCredentialUseCase;
use crate::domain::backend::IdentityBackend;
use crate::domain::services::{RouteClass, classify};
use crate::domain::value_object::role::Role;
use crate::error::GateResult;

/// What the gate decided for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// No zone matched; the backend was not contacted
    Public,
    /// The zone's credential was accepted upstream
    Authorized { role: Role },
    /// The zone's credential was refused; send the browser to `login_path`
    Rejected { role: Role, login_path: String },
}

pub struct GateUseCase<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    backend: Arc<B>,
    config: Arc<GateConfig>,
}

impl<B> GateUseCase<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    pub fn new(backend: Arc<B>, config: Arc<GateConfig>) -> Self {
        Self { backend, config }
    }

    /// Decide the fate of a request to `path`
    ///
    /// `Err` means the backend could not be asked; callers must fail closed.
    pub async fn decide(&self, path: &str, headers: &HeaderMap) -> GateResult<GateDecision> {
        let zone = match classify(&self.config.zones, path) {
            RouteClass::Public => return Ok(GateDecision::Public),
            RouteClass::Protected(zone) => zone,
        };

        let credential = SessionCookieStore::new(self.config.clone()).read(headers, zone.role);

        let verification = VerifyCredentialUseCase::new(self.backend.clone())
            .execute(zone, &credential)
            .await?;

        if verification.ok {
            Ok(GateDecision::Authorized { role: zone.role })
        } else {
            Ok(GateDecision::Rejected {
                role: zone.role,
                login_path: zone.login_path.clone(),
            })
        }
    }
}
