//! Duke Basketball Stats Library
//!
//! Client and transformation layer for a basketball statistics provider
//! (API-Basketball), turning raw player profiles and season totals into
//! per-game rates, team averages, radar-chart vectors and a team hype index.
//!
//! ## Features
//!
//! - **Cached Provider Client**: five-minute response cache with an injectable clock
//! - **Stats Transformation**: pure, total functions over partial payloads
//! - **Mock Fallback**: a fixed roster whenever live data cannot be loaded
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dukembb::{api::StatsClient, commands::player_data::load_players_data, config::ApiConfig, Season, TeamId};
//!
//! # async fn example() -> dukembb::Result<()> {
//! let client = StatsClient::new(ApiConfig::from_env())?;
//! let data = load_players_data(&client, Some(TeamId::new(2000)), &Season::new("2024")).await;
//!
//! println!("Hype index: {}", data.hype_index);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export API_BASKETBALL_KEY=your-key
//! export DEFAULT_TEAM_ID=2000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Season, TeamId};
pub use error::{DukeError, Result};
pub use stats::{PlayerDerived, RadarVector, TeamAverages};
