//! Smite Proxy - an HTTP microservice in front of the Hi-Rez Smite API.
//!
//! The service signs every upstream call, keeps one API session for the
//! process and re-exposes a small set of endpoints as plain JSON.
//!
//! # Features
//!
//! - MD5 request signatures in the Hi-Rez format
//! - Session creation at startup, shared by all requests
//! - Privacy-aware player lookups
//! - Axum front-end relaying upstream JSON verbatim
//!
//! # Example
//!
//! ```no_run
//! use smite_proxy::{Credentials, SmiteApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SmiteApi::new(Credentials::new("1004", "23DF3C7E9BD14D84BF892AD206B6755C"))?;
//!     api.create_session().await?;
//!
//!     let info = api.get_player_info("Paladin").await?;
//!     println!("{}", info);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod server;

// Re-exports for convenience
pub use api::{Credentials, SmiteApi};
pub use config::Config;
pub use error::{Error, Result};
pub use server::{routes, serve, AppState};
