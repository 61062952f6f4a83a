//! Shared types, errors, and configuration for FilmFlow.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Money and currency display
//! - Pagination envelopes for list endpoints
//! - Explicit session context for API access
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod format;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::Session;
