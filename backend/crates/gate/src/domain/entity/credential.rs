//! Credential Entity

use crate::domain::value_object::role::Role;

/// A role's token pair as held in the browser's cookies
///
/// Created at login, replaced wholesale on refresh, removed at logout.
/// An empty access token means "no session"; it is still sent upstream
/// so the backend remains the only judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub role: Role,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Credential {
    pub fn new(role: Role, access_token: impl Into<String>) -> Self {
        Self {
            role,
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    /// Credential for a browser that carries no cookie for `role`
    pub fn absent(role: Role) -> Self {
        Self::new(role, String::new())
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        let refresh_token = refresh_token.into();
        self.refresh_token = (!refresh_token.is_empty()).then_some(refresh_token);
        self
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}
