//! Rust SDK for the Nylas v3 API.
//!
//! [`Client`] owns one shared HTTP session and hands out resource wrappers
//! ([`Auth`], [`Grants`], [`Calendars`], [`Events`]). Each wrapper method maps
//! to a single API call and returns typed models from [`domain`].

pub mod config;
pub mod core;
pub mod domain;
pub mod resources;
pub mod utils;

pub use config::{ClientConfig, Region};
pub use crate::core::{client::Client, http_client::HttpClient};
pub use resources::{Auth, Calendars, Events, Grants};
pub use utils::error::{NylasApiError, NylasError, NylasOAuthError, Result};
