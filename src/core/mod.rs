//! Core utilities for the dukembb client
//!
//! This module consolidates the pieces shared by every upstream call:
//! - `cache`: in-memory response cache with a fixed time-to-live
//! - `http`: request header construction for the statistics provider

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{cache_key, Clock, ResponseCache, SystemClock, CACHE_TTL};
pub use http::api_header_map;

#[cfg(any(test, feature = "test-utils"))]
pub use cache::ManualClock;
