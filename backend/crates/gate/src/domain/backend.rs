//! Identity Backend Trait
//!
//! The external service that owns every session. Implementation is in the
//! infrastructure layer.

use axum::body::Bytes;
use http::{HeaderValue, StatusCode};

use crate::domain::entity::{credential::Credential, zone::Zone};
use crate::domain::value_object::verification::Verification;
use crate::error::GateResult;

/// Body fields that carry tokens; tokens reach the browser only as
/// HttpOnly cookies
pub const TOKEN_FIELDS: [&str; 2] = ["accessToken", "refreshToken"];

/// A backend answer relayed back to the browser
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
    /// Token pair found in a successful reply, if any
    pub credential: Option<Credential>,
}

impl BackendReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Same reply with token fields removed from a JSON body
    ///
    /// Top-level fields and those under `data` are removed; any other body
    /// is left untouched.
    pub fn without_token_fields(mut self) -> Self {
        let Ok(mut value) = serde_json::from_slice::<serde_json::Value>(&self.body) else {
            return self;
        };

        let mut removed = strip_token_fields(&mut value);
        if let Some(data) = value.get_mut("data") {
            removed |= strip_token_fields(data);
        }

        if removed {
            self.body = Bytes::from(value.to_string());
        }
        self
    }
}

fn strip_token_fields(value: &mut serde_json::Value) -> bool {
    let Some(object) = value.as_object_mut() else {
        return false;
    };
    let mut removed = false;
    for field in TOKEN_FIELDS {
        removed |= object.remove(field).is_some();
    }
    removed
}

/// Identity backend trait
///
/// Transport failures (connect, DNS, timeout) are `Err(GateError::Upstream)`.
/// Any HTTP answer, including 4xx/5xx, is `Ok`.
#[trait_variant::make(IdentityBackend: Send)]
pub trait LocalIdentityBackend {
    /// Ask the zone's identity endpoint whether `access_token` is live
    async fn verify(&self, zone: &Zone, access_token: &str) -> GateResult<Verification>;

    /// Forward a login form body to the zone's login endpoint
    async fn login(&self, zone: &Zone, body: Bytes) -> GateResult<BackendReply>;

    /// Exchange a refresh token at the zone's refresh endpoint
    async fn refresh(&self, zone: &Zone, refresh_token: &str) -> GateResult<BackendReply>;
}
