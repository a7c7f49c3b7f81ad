//! Command implementations for the dukembb CLI

pub mod league_data;
pub mod player_data;

use crate::{config::ApiConfig, Season, TeamId};

/// Explicit team, else the configured default.
pub fn resolve_team_id(team: Option<TeamId>, config: &ApiConfig) -> Option<TeamId> {
    team.or(config.default_team_id)
}

/// Explicit season, else the configured default.
pub fn resolve_season(season: Option<Season>, config: &ApiConfig) -> Season {
    season.unwrap_or_else(|| config.default_season.clone())
}
