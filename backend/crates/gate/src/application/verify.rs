//! Verify Credential Use Case
//!
//! Relays a credential to the backend and reports what it said.

use std::sync::Arc;

use crate::domain::backend::IdentityBackend;
use crate::domain::entity::{credential::Credential, zone::Zone};
use crate::domain::value_object::verification::Verification;
use crate::error::GateResult;

pub struct VerifyCredentialUseCase<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    backend: Arc<B>,
}

impl<B> VerifyCredentialUseCase<B>
where
    B: IdentityBackend + Clone + Send + Sync + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// One upstream call, no retry, no cache
    ///
    /// An empty access token is still sent: rejection is the backend's call.
    pub async fn execute(&self, zone: &Zone, credential: &Credential) -> GateResult<Verification> {
        let verification = self
            .backend
            .verify(zone, &credential.access_token)
            .await?;

        tracing::debug!(
            role = %zone.role,
            has_token = credential.has_access_token(),
            ok = verification.ok,
            "Credential verified upstream"
        );

        Ok(verification)
    }
}
