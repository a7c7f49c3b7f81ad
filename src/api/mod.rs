//! Statistics provider integration: payload types and the cached HTTP client.

pub mod http;
pub mod types;

pub use http::StatsClient;
