//! Cached HTTP client for the basketball statistics provider.
//!
//! Every endpoint goes through [`StatsClient::cached_get`]: a fresh cached
//! response is returned as is, otherwise the provider is called and a
//! successful payload is stored under the same key.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument, warn};

use crate::{
    api::types::{Envelope, League, PlayerProfile, PlayerStatisticsRaw, Team},
    config::ApiConfig,
    core::{api_header_map, cache_key, ResponseCache},
    DukeError, LeagueId, Result, Season, TeamId,
};


const USER_AGENT: &str = concat!("dukembb/", env!("CARGO_PKG_VERSION"));

/// Extract the first message from a non-empty `errors` field.
///
/// The provider sends a list on most failures and an object keyed by field
/// name on auth failures; both count.
pub fn payload_error(data: &Value) -> Option<String> {
    let first = match data.get("errors")? {
        Value::Array(items) => items.first()?,
        Value::Object(fields) => fields.values().next()?,
        _ => return None,
    };
    Some(match first {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn parse_response<T: DeserializeOwned>(data: Value) -> Result<Vec<T>> {
    let envelope: Envelope<T> = serde_json::from_value(data)?;
    Ok(envelope.response)
}

/// Client owning the provider configuration and the response cache.
pub struct StatsClient {
    http: Client,
    config: ApiConfig,
    cache: Mutex<ResponseCache<Value>>,
}

impl StatsClient {
    /// Create a client with a wall-clock cache.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_cache(config, ResponseCache::default())
    }

    /// Create a client around an existing cache (e.g. one with a manual clock).
    pub fn with_cache(config: ApiConfig, cache: ResponseCache<Value>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            config,
            cache: Mutex::new(cache),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn is_api_available(&self) -> bool {
        self.config.is_api_available()
    }

    fn cache(&self) -> MutexGuard<'_, ResponseCache<Value>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of responses currently held in the cache.
    pub fn cached_entries(&self) -> usize {
        self.cache().len()
    }

    /// Serve from the cache when fresh, otherwise fetch and store.
    pub async fn cached_get(
        &self,
        endpoint: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<Value> {
        let key = cache_key(endpoint, params);
        let cached = self.cache().get(&key);
        if let Some(cached) = cached {
            return Ok(cached);
        }

        let data = self.request(endpoint, params).await?;
        self.cache().set(key, data.clone());
        Ok(data)
    }

    /// Issue one GET against the provider, bypassing the cache.
    #[instrument(skip(self, params))]
    pub async fn request(&self, endpoint: &str, params: &[(&str, Option<String>)]) -> Result<Value> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if self.is_api_available() => key,
            _ => return Err(DukeError::Unavailable),
        };

        let url = format!("{}/{}", self.config.api_base.trim_end_matches('/'), endpoint);
        let query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
            .collect();

        debug!("GET {} query={:?}", url, query);

        let res = self
            .http
            .get(&url)
            .headers(api_header_map(api_key)?)
            .query(&query)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!("Provider returned {} for {}", status, url);
            return Err(DukeError::from_status(status));
        }

        let data = res.json::<Value>().await?;
        if let Some(message) = payload_error(&data) {
            warn!("Provider reported errors for {}: {}", url, message);
            return Err(DukeError::Api { message });
        }

        Ok(data)
    }

    pub async fn get_leagues(&self) -> Result<Vec<League>> {
        parse_response(self.cached_get("leagues", &[]).await?)
    }

    pub async fn get_teams(&self, league: LeagueId, season: &Season) -> Result<Vec<Team>> {
        let params = [
            ("league", Some(league.to_string())),
            ("season", Some(season.to_string())),
        ];
        parse_response(self.cached_get("teams", &params).await?)
    }

    pub async fn search_teams(
        &self,
        query: &str,
        league: Option<LeagueId>,
        season: Option<&Season>,
    ) -> Result<Vec<Team>> {
        let params = [
            ("search", Some(query.to_string())),
            ("league", league.map(|l| l.to_string())),
            ("season", season.map(|s| s.to_string())),
        ];
        parse_response(self.cached_get("teams", &params).await?)
    }

    pub async fn get_players(&self, team: TeamId, season: &Season) -> Result<Vec<PlayerProfile>> {
        let params = [
            ("team", Some(team.to_string())),
            ("season", Some(season.to_string())),
        ];
        parse_response(self.cached_get("players", &params).await?)
    }

    pub async fn get_player_statistics(
        &self,
        team: TeamId,
        season: &Season,
    ) -> Result<Vec<PlayerStatisticsRaw>> {
        let params = [
            ("team", Some(team.to_string())),
            ("season", Some(season.to_string())),
        ];
        parse_response(self.cached_get("players/statistics", &params).await?)
    }
}
