//! HTTP Identity Backend
//!
//! `IdentityBackend` over the backend's REST API using the shared
//! `reqwest::Client`.

use axum::body::Bytes;
use http::{HeaderMap, HeaderValue, header};
use platform::client::join_url;
use platform::cookie::extract_set_cookie;
use serde::Deserialize;
use std::time::Duration;

use crate::application::config::GateConfig;
use crate::domain::backend::{BackendReply, IdentityBackend};
use crate::domain::entity::{credential::Credential, zone::Zone};
use crate::domain::value_object::verification::Verification;
use crate::error::{GateError, GateResult};

/// Token pair as the backend returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPair {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Tokens may come top-level or wrapped in `data`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenEnvelope {
    Flat(TokenPair),
    Wrapped { data: TokenPair },
}

impl TokenEnvelope {
    fn into_pair(self) -> TokenPair {
        match self {
            TokenEnvelope::Flat(pair) | TokenEnvelope::Wrapped { data: pair } => pair,
        }
    }
}

#[derive(Clone)]
pub struct HttpIdentityBackend {
    client: reqwest::Client,
    base_url: String,
    verify_timeout: Duration,
    relay_timeout: Duration,
}

impl HttpIdentityBackend {
    /// `client` is the process-wide pool built at startup
    pub fn new(client: reqwest::Client, config: &GateConfig) -> Self {
        Self {
            client,
            base_url: config.backend_base_url.clone(),
            verify_timeout: config.verify_timeout,
            relay_timeout: config.relay_timeout,
        }
    }

    async fn relay(
        &self,
        zone: &Zone,
        request: reqwest::RequestBuilder,
    ) -> GateResult<BackendReply> {
        let response = request
            .timeout(self.relay_timeout)
            .send()
            .await
            .map_err(|e| GateError::upstream(zone.role, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let content_type = headers.get(header::CONTENT_TYPE).cloned();
        let body = response
            .bytes()
            .await
            .map_err(|e| GateError::upstream(zone.role, e))?;

        let credential = if status.is_success() {
            parse_credential(zone, &headers, &body)
        } else {
            None
        };

        Ok(BackendReply {
            status,
            content_type,
            body,
            credential,
        })
    }
}

impl IdentityBackend for HttpIdentityBackend {
    async fn verify(&self, zone: &Zone, access_token: &str) -> GateResult<Verification> {
        let url = join_url(&self.base_url, &zone.identity_endpoint);

        let response = self
            .client
            .get(url)
            .header(
                header::COOKIE,
                format!("{}={}", zone.role.access_cookie(), access_token),
            )
            .timeout(self.verify_timeout)
            .send()
            .await
            .map_err(|e| GateError::upstream(zone.role, e))?;

        Ok(Verification::from_status(response.status()))
    }

    async fn login(&self, zone: &Zone, body: Bytes) -> GateResult<BackendReply> {
        let url = join_url(&self.base_url, &zone.login_endpoint);

        let request = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);

        self.relay(zone, request).await
    }

    async fn refresh(&self, zone: &Zone, refresh_token: &str) -> GateResult<BackendReply> {
        let url = join_url(&self.base_url, &zone.refresh_endpoint);

        let request = self.client.post(url).header(
            header::COOKIE,
            format!("{}={}", zone.role.refresh_cookie(), refresh_token),
        );

        self.relay(zone, request).await
    }
}

/// Pull a token pair out of a successful backend reply
///
/// The JSON body wins; the role's own cookies in the backend's
/// `Set-Cookie` headers fill whatever the body lacks.
fn parse_credential(zone: &Zone, headers: &HeaderMap, body: &[u8]) -> Option<Credential> {
    let (access_token, refresh_token) = match serde_json::from_slice::<TokenEnvelope>(body) {
        Ok(envelope) => {
            let pair = envelope.into_pair();
            (Some(pair.access_token), pair.refresh_token)
        }
        Err(_) => (None, None),
    };

    let access_token = access_token
        .filter(|token| !token.is_empty())
        .or_else(|| extract_set_cookie(headers, zone.role.access_cookie()))?;
    let refresh_token =
        refresh_token.or_else(|| extract_set_cookie(headers, zone.role.refresh_cookie()));

    let credential = Credential::new(zone.role, access_token);
    Some(match refresh_token {
        Some(refresh_token) => credential.with_refresh_token(refresh_token),
        None => credential,
    })
}
