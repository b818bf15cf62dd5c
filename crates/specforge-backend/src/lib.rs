//! Adapter to the hosted backend-as-a-service.
//!
//! Everything that talks to the remote identity and row-store endpoints
//! lives here: configuration validation, the auth flow, the PostgREST-style
//! table client, and the seeded-data loader. Provider error shapes are
//! decoded into the closed [`BackendError`] taxonomy at this boundary so
//! nothing downstream ever inspects raw provider fields.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;

pub use auth::{AuthClient, Session, sign_out_with_timeout};
pub use client::{TableClient, TableSource};
pub use config::{BackendConfig, config_error};
pub use error::{BackendError, Result};
pub use loader::{FETCH_TIMEOUT, load_seeded_tables};
