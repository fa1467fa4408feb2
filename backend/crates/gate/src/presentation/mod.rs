//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::GateAppState;
pub use middleware::{GateMiddlewareState, ZoneSession, protect, require_zone_session};
pub use router::{gate_router, gate_router_generic};
