//! Core module - configuration, state and logging
//!
//! - [`Config`] - storefront configuration
//! - [`StorefrontState`] - assembled engine state
//! - [`InitError`] - initialization failures

pub mod config;
pub mod logger;
pub mod state;

pub use config::Config;
pub use state::{InitError, StorefrontState};
