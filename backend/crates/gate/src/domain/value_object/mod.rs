//! Value Object Module

pub mod role;
pub mod verification;
