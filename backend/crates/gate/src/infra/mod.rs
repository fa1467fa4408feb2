//! Infrastructure Layer
//!
//! HTTP implementations of the identity backend and the origin relay.

pub mod rest;
pub mod origin;
