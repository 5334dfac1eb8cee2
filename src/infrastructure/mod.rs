//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - Localization: Language file loading
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod localization;
pub mod state;
