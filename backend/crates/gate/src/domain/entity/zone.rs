//! Zone Entity
//!
//! A protected area of the site and everything needed to guard it.

use crate::domain::value_object::role::Role;

/// A path prefix guarded by one role's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub role: Role,
    /// Gated prefix, without trailing slash
    pub path_prefix: String,
    /// Where rejected browsers are sent
    pub login_path: String,
    /// Backend endpoint answering 2xx for a live session
    pub identity_endpoint: String,
    /// Backend endpoint exchanging form credentials for tokens
    pub login_endpoint: String,
    /// Backend endpoint exchanging a refresh token for a new pair
    pub refresh_endpoint: String,
}

impl Zone {
    pub fn student() -> Self {
        Self {
            role: Role::Student,
            path_prefix: "/dashboard".to_string(),
            login_path: "/login".to_string(),
            identity_endpoint: "/api/student/current-student".to_string(),
            login_endpoint: "/api/student/login".to_string(),
            refresh_endpoint: "/api/student/refresh-token".to_string(),
        }
    }

    pub fn admin() -> Self {
        Self {
            role: Role::Admin,
            path_prefix: "/admin".to_string(),
            login_path: "/admin-login".to_string(),
            identity_endpoint: "/api/admin/get-admin".to_string(),
            login_endpoint: "/api/admin/login".to_string(),
            refresh_endpoint: "/api/admin/refresh-token".to_string(),
        }
    }

    pub fn staff() -> Self {
        Self {
            role: Role::Staff,
            path_prefix: "/management".to_string(),
            login_path: "/management-login".to_string(),
            identity_endpoint: "/api/staff/get-staff".to_string(),
            login_endpoint: "/api/staff/login".to_string(),
            refresh_endpoint: "/api/staff/refresh-token".to_string(),
        }
    }

    /// Segment-aware prefix match
    ///
    /// `/admin` and `/admin/...` match, `/admin-login` does not.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.path_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Ordered zone configuration; earlier zones win
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::new(vec![Zone::student(), Zone::admin(), Zone::staff()])
    }
}

impl ZoneTable {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// First zone whose prefix matches `path`
    pub fn find(&self, path: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.matches(path))
    }

    pub fn for_role(&self, role: Role) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.role == role)
    }
}
