//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::value_object::role::Role;

/// GET /session/{role}/status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub role: Role,
}
