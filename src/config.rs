//! Environment configuration for the statistics provider.

use crate::{LeagueId, Season, TeamId};
use tracing::warn;

pub const API_BASE_ENV_VAR: &str = "API_BASKETBALL_BASE";
pub const API_KEY_ENV_VAR: &str = "API_BASKETBALL_KEY";
pub const LEAGUE_ID_ENV_VAR: &str = "DEFAULT_LEAGUE_ID";
pub const SEASON_ENV_VAR: &str = "DEFAULT_SEASON";
pub const TEAM_ID_ENV_VAR: &str = "DEFAULT_TEAM_ID";

pub const DEFAULT_API_BASE: &str = "https://v3.basketball.api-sports.io";

/// Connection settings and default selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub default_league_id: LeagueId,
    pub default_season: Season,
    pub default_team_id: Option<TeamId>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            default_league_id: LeagueId::default(),
            default_season: Season::default(),
            default_team_id: None,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, treating blank values as unset.
    ///
    /// Unparsable ids fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let default_league_id = match get(LEAGUE_ID_ENV_VAR).map(|v| v.parse::<LeagueId>()) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                warn!("Ignoring {}: {}", LEAGUE_ID_ENV_VAR, e);
                defaults.default_league_id
            }
            None => defaults.default_league_id,
        };

        let default_team_id = match get(TEAM_ID_ENV_VAR).map(|v| v.parse::<TeamId>()) {
            Some(Ok(id)) => Some(id),
            Some(Err(e)) => {
                warn!("Ignoring {}: {}", TEAM_ID_ENV_VAR, e);
                None
            }
            None => None,
        };

        Self {
            api_base: get(API_BASE_ENV_VAR).unwrap_or(defaults.api_base),
            api_key: get(API_KEY_ENV_VAR),
            default_league_id,
            default_season: get(SEASON_ENV_VAR)
                .map(Season::new)
                .unwrap_or(defaults.default_season),
            default_team_id,
        }
    }

    /// Whether upstream calls can be attempted at all.
    pub fn is_api_available(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty()) && !self.api_base.is_empty()
    }

    /// Whether the default player view can be loaded from the API.
    pub fn is_config_valid(&self) -> bool {
        self.api_key.is_some() && self.default_team_id.is_some()
    }

    /// Human-readable names of the settings still missing.
    pub fn missing_config(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push("API Key");
        }
        if self.default_team_id.is_none() {
            missing.push("Duke Team ID");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.api_key, None);
        assert_eq!(config.default_league_id, LeagueId::new(12));
        assert_eq!(config.default_season, Season::new("2024"));
        assert_eq!(config.default_team_id, None);
    }

    #[test]
    fn test_reads_all_values() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (API_BASE_ENV_VAR, "http://localhost:9999"),
            (API_KEY_ENV_VAR, "abc123"),
            (LEAGUE_ID_ENV_VAR, "116"),
            (SEASON_ENV_VAR, "2023-2024"),
            (TEAM_ID_ENV_VAR, "2000"),
        ]));

        assert_eq!(config.api_base, "http://localhost:9999");
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.default_league_id, LeagueId::new(116));
        assert_eq!(config.default_season.as_str(), "2023-2024");
        assert_eq!(config.default_team_id, Some(TeamId::new(2000)));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (API_BASE_ENV_VAR, ""),
            (API_KEY_ENV_VAR, "   "),
        ]));

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.api_key, None);
        assert!(!config.is_api_available());
    }

    #[test]
    fn test_invalid_ids_fall_back() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (LEAGUE_ID_ENV_VAR, "ncaa"),
            (TEAM_ID_ENV_VAR, "duke"),
        ]));

        assert_eq!(config.default_league_id, LeagueId::new(12));
        assert_eq!(config.default_team_id, None);
    }

    #[test]
    fn test_api_available_requires_key() {
        let mut config = ApiConfig::default();
        assert!(!config.is_api_available());

        config.api_key = Some("k".to_string());
        assert!(config.is_api_available());

        config.api_base = String::new();
        assert!(!config.is_api_available());
    }

    #[test]
    fn test_missing_config_lists_key_and_team() {
        let config = ApiConfig::default();
        assert_eq!(config.missing_config(), vec!["API Key", "Duke Team ID"]);
        assert!(!config.is_config_valid());
    }

    #[test]
    fn test_valid_config() {
        let config = ApiConfig {
            api_key: Some("k".to_string()),
            default_team_id: Some(TeamId::new(2000)),
            ..ApiConfig::default()
        };
        assert!(config.missing_config().is_empty());
        assert!(config.is_config_valid());
    }
}
