//! Smite API module.
//!
//! This module provides:
//! - HTTP client for the Smite REST API
//! - Session management
//! - Request signing
//! - Typed views over inspected responses

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod types;

pub use auth::{create_signature, Signature};
pub use client::{Credentials, SmiteApi, API_BASE};
pub use types::*;
