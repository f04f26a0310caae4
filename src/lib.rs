//! Orbital: client for the Orbital application platform.
//!
//! Resolves the authenticated user context from the Orbital control plane
//! while tolerating schema drift between client and server versions, and
//! drives preview-environment lifecycle operations.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod session;
pub mod telemetry;
pub mod types;
