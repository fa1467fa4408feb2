//! Session Cookie Store
//!
//! Reads and writes the per-role credential cookies. The browser is the
//! store; this type only knows the names and attributes.

use http::{HeaderMap, HeaderValue};
use platform::cookie::{extract_cookie, to_header_value};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::entity::credential::Credential;
use crate::domain::value_object::role::Role;

pub struct SessionCookieStore {
    config: Arc<GateConfig>,
}

impl SessionCookieStore {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    /// Current credential for `role`; a missing cookie reads as empty
    pub fn read(&self, headers: &HeaderMap, role: Role) -> Credential {
        let access_token = extract_cookie(headers, role.access_cookie()).unwrap_or_default();
        let credential = Credential::new(role, access_token);

        match extract_cookie(headers, role.refresh_cookie()) {
            Some(refresh_token) => credential.with_refresh_token(refresh_token),
            None => credential,
        }
    }

    /// Set-Cookie values installing `credential`
    ///
    /// Without a refresh token only the access cookie is written.
    pub fn establish(&self, credential: &Credential) -> Vec<HeaderValue> {
        let attrs = &self.config.cookie;
        let role = credential.role;

        let mut cookies = vec![attrs.build_set_cookie(
            role.access_cookie(),
            &credential.access_token,
            self.config.access_token_max_age_secs(),
        )];

        if let Some(refresh_token) = credential.refresh_token() {
            cookies.push(attrs.build_set_cookie(
                role.refresh_cookie(),
                refresh_token,
                self.config.refresh_token_max_age_secs(),
            ));
        }

        to_header_values(role, cookies)
    }

    /// Set-Cookie values removing both of `role`'s cookies
    pub fn clear(&self, role: Role) -> Vec<HeaderValue> {
        let attrs = &self.config.cookie;
        let cookies = vec![
            attrs.build_delete_cookie(role.access_cookie()),
            attrs.build_delete_cookie(role.refresh_cookie()),
        ];

        to_header_values(role, cookies)
    }
}

fn to_header_values(role: Role, cookies: Vec<String>) -> Vec<HeaderValue> {
    cookies
        .iter()
        .filter_map(|cookie| {
            let value = to_header_value(cookie);
            if value.is_none() {
                tracing::warn!(role = %role, "Dropping cookie with illegal header characters");
            }
            value
        })
        .collect()
}
