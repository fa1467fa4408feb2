use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GateError;

/// The three independent session kinds a browser can hold at once
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[display("student")]
    Student,
    #[display("admin")]
    Admin,
    #[display("staff")]
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Admin, Role::Staff];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Student => "student",
            Admin => "admin",
            Staff => "staff",
        }
    }

    /// Name of the cookie holding this role's access token
    #[inline]
    pub const fn access_cookie(&self) -> &'static str {
        use Role::*;
        match self {
            Student => "accessToken",
            Admin => "adminAccessToken",
            Staff => "staffAccessToken",
        }
    }

    /// Name of the cookie holding this role's refresh token
    #[inline]
    pub const fn refresh_cookie(&self) -> &'static str {
        use Role::*;
        match self {
            Student => "refreshToken",
            Admin => "adminRefreshToken",
            Staff => "staffRefreshToken",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl FromStr for Role {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_code(s).ok_or_else(|| GateError::InvalidRole(s.to_string()))
    }
}
