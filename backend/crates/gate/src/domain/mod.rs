//! Domain Layer
//!
//! Contains entities, value objects, the route classifier and the identity
//! backend trait.

pub mod backend;
pub mod entity;
pub mod services;
pub mod value_object;

// Re-exports
pub use backend::{BackendReply, IdentityBackend};
pub use entity::{credential::Credential, zone::Zone, zone::ZoneTable};
pub use services::{RouteClass, classify};
pub use value_object::{role::Role, verification::Verification};
