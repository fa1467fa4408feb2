//! Application Configuration
//!
//! Configuration for the gate application layer.

use http::HeaderName;
use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieAttributes, SameSite};

use crate::domain::entity::zone::ZoneTable;

/// Header attached to authorized requests and responses
pub const DEFAULT_MARKER_HEADER: &str = "x-devtools-disabled";

/// Value of the marker header
pub const MARKER_VALUE: &str = "true";

/// Gate application configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Base URL of the identity backend; empty is allowed and fails at
    /// request time
    pub backend_base_url: String,
    /// Upper bound on one identity check
    pub verify_timeout: Duration,
    /// Upper bound on login/refresh relay calls
    pub relay_timeout: Duration,
    /// Protected zones in priority order
    pub zones: ZoneTable,
    /// Marker header name for authorized traffic
    pub marker_header: HeaderName,
    /// Attributes for every credential cookie written
    pub cookie: CookieAttributes,
    /// Max-Age for access token cookies (None = session cookie)
    pub access_token_max_age: Option<Duration>,
    /// Max-Age for refresh token cookies (None = session cookie)
    pub refresh_token_max_age: Option<Duration>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            backend_base_url: String::new(),
            verify_timeout: Duration::from_secs(5),
            relay_timeout: Duration::from_secs(10),
            zones: ZoneTable::default(),
            marker_header: HeaderName::from_static(DEFAULT_MARKER_HEADER),
            cookie: CookieAttributes::default(),
            access_token_max_age: Some(Duration::from_secs(24 * 3600)), // 1 day
            refresh_token_max_age: Some(Duration::from_secs(7 * 24 * 3600)), // 1 week
        }
    }
}

impl GateConfig {
    pub fn with_backend(backend_base_url: impl Into<String>) -> Self {
        Self {
            backend_base_url: backend_base_url.into(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, local backend)
    pub fn development() -> Self {
        Self {
            cookie: CookieAttributes {
                secure: false,
                ..Default::default()
            },
            ..Self::with_backend("http://localhost:4000")
        }
    }

    pub fn access_token_max_age_secs(&self) -> Option<u64> {
        self.access_token_max_age.map(|d| d.as_secs())
    }

    pub fn refresh_token_max_age_secs(&self) -> Option<u64> {
        self.refresh_token_max_age.map(|d| d.as_secs())
    }
}
