//! Derived player and team figures.
//!
//! - `types`: per-game rates, team averages, radar vectors
//! - `compute`: pure transformation from provider payloads to derived figures
//! - `mock`: fixed roster used when the provider cannot be reached

pub mod compute;
pub mod mock;
pub mod types;

pub use compute::{
    aggregate_team_averages, calculate_hype_index, format_share_text, merge_profiles_with_stats,
    normalize_for_radar, top_performers,
};
pub use types::{PerGameRates, PlayerDerived, RadarVector, RecentForm, TeamAverages};
