//! Cookie Management Infrastructure
//!
//! Parsing of the `Cookie` request header and building of `Set-Cookie`
//! values for the credential cookies the gateway relays.

use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes shared by every cookie the gateway writes
#[derive(Debug, Clone)]
pub struct CookieAttributes {
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieAttributes {
    /// Build a Set-Cookie value
    pub fn build_set_cookie(&self, name: &str, value: &str, max_age_secs: Option<u64>) -> String {
        let mut parts = vec![format!("{name}={value}")];
        self.push_attributes(&mut parts);

        if let Some(max_age) = max_age_secs {
            parts.push(format!("Max-Age={max_age}"));
        }

        parts.join("; ")
    }

    /// Build a Set-Cookie value that expires the cookie immediately
    ///
    /// Path and Secure must match the original cookie or browsers keep it.
    pub fn build_delete_cookie(&self, name: &str) -> String {
        let mut parts = vec![format!("{name}=")];
        self.push_attributes(&mut parts);
        parts.push("Max-Age=0".to_string());
        parts.push("Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string());

        parts.join("; ")
    }

    fn push_attributes(&self, parts: &mut Vec<String>) {
        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        parts.push(format!("Path={}", self.path));
    }
}

/// Extract a cookie value from headers
///
/// HTTP/2 clients may split cookies over several `Cookie` headers, so
/// every header is searched. The first occurrence of `name` wins.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key.trim() == name).then(|| value.trim().to_string())
        })
}

/// Extract a cookie value an upstream response sets
///
/// Only the `name=value` pair of each `Set-Cookie` is read; attributes are
/// ignored. An empty value (a deletion) counts as absent.
pub fn extract_set_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| {
            let pair = value.split(';').next()?;
            let (key, value) = pair.trim().split_once('=')?;
            (key.trim() == name).then(|| value.trim().to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Convert a built cookie string into a header value
///
/// Token values come from the backend; anything that is not a legal header
/// value is dropped rather than forwarded.
pub fn to_header_value(cookie: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(cookie).ok()
}
