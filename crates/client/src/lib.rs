//! Async REST client for the FilmFlow dashboard backend.
//!
//! Wraps the auth, budget and timeline endpoints in typed methods on
//! [`ApiClient`]. Sessions are passed in explicitly; nothing is read from
//! ambient storage.

mod auth;
mod budget;
mod client;
pub mod error;
mod timeline;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
