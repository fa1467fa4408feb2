//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Outbound HTTP client construction and URL joining
//! - Client address and hop-by-hop header helpers for relaying
//! - Cookie parsing and Set-Cookie building

pub mod client;
pub mod cookie;
