//! Core analytics for FilmFlow.
//!
//! Pure computations over a production's budget and timeline with ZERO
//! network or storage dependencies. Callers load the data, pick a reference
//! time, and get back plain serializable results.
//!
//! # Modules
//!
//! - `budget` - Burn rate, utilization, forecasts and variance per category
//! - `timeline` - Task progress, upcoming milestones and highlighted tasks
//! - `cache` - Memoized analytics results
//! - `fixtures` - Demo production data

pub mod budget;
pub mod cache;
pub mod fixtures;
pub mod timeline;
pub mod windows;

pub use cache::{AnalyticsCache, Cached};
pub use windows::AnalyticsWindows;
