//! Session Gate Module
//!
//! Clean Architecture structure:
//! - `domain/` - Roles, credentials, zones, the identity backend trait
//! - `application/` - Gate decision, verification and session relay use cases
//! - `infra/` - HTTP implementations (identity backend, origin proxy)
//! - `presentation/` - Middleware, session handlers, router
//!
//! ## Trust Model
//! - Tokens are opaque: nothing here decodes or validates them locally
//! - Every protected request is verified by exactly one backend call
//! - Verification results are never cached across requests
//! - Any failure to reach the backend fails closed (500, never pass-through)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use error::{GateError, GateResult};
pub use infra::rest::HttpIdentityBackend;
pub use infra::origin::OriginProxy;
pub use presentation::router::{gate_router, gate_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
