//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod gate;
pub mod relay;
pub mod session;
pub mod verify;

// Re-exports
pub use config::GateConfig;
pub use gate::{GateDecision, GateUseCase};
pub use relay::{LoginOutput, RefreshOutcome, SessionRelayUseCase};
pub use session::SessionCookieStore;
pub use verify::VerifyCredentialUseCase;
