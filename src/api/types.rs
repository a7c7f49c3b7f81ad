use crate::PlayerId;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

#[cfg(test)]
mod tests;

/// Accept a number, a numeric string (optionally `%`-suffixed) or null.
/// Anything else reads as absent.
fn de_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }))
}

/// Accept a string or a number and keep it as text.
fn de_opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Read a list where null means empty and elements that do not fit `T` are
/// skipped instead of failing the whole list.
fn de_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    let items = match raw {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(other) => {
            warn!("Expected a list in response, got: {}", other);
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping malformed response element: {}", e);
                None
            }
        })
        .collect())
}

/// Top-level wrapper every provider endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "de_lenient_vec")]
    pub response: Vec<T>,
}

/// Team reference embedded in a player profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Player identity and biographical data from `players`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    /// Display name, used when first/last are missing
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_lenient")]
    pub number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_lenient")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_lenient")]
    pub weight: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

impl PlayerProfile {
    /// Bare profile with only an id, everything else absent.
    pub fn with_id(id: PlayerId) -> Self {
        Self {
            id,
            firstname: None,
            lastname: None,
            name: None,
            number: None,
            position: None,
            height: None,
            weight: None,
            photo: None,
            team: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerRef {
    #[serde(default)]
    pub id: Option<PlayerId>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GamesPlayed {
    #[serde(default, deserialize_with = "de_opt_f64_lenient")]
    pub played: Option<f64>,
}

/// Season-cumulative counter, e.g. `{"total": 412}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatTotal {
    #[serde(default, deserialize_with = "de_opt_f64_lenient")]
    pub total: Option<f64>,
}

/// Shooting split; only the percentage is used.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShootingSplit {
    #[serde(default, deserialize_with = "de_opt_f64_lenient")]
    pub percentage: Option<f64>,
}

/// Per-player season statistics from `players/statistics`.
///
/// Every block is optional; accessors read missing values as zero.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerStatisticsRaw {
    #[serde(default)]
    pub player: Option<PlayerRef>,
    #[serde(default)]
    pub games: Option<GamesPlayed>,
    #[serde(default)]
    pub points: Option<StatTotal>,
    #[serde(default)]
    pub rebounds: Option<StatTotal>,
    #[serde(default)]
    pub assists: Option<StatTotal>,
    #[serde(default)]
    pub steals: Option<StatTotal>,
    #[serde(default)]
    pub blocks: Option<StatTotal>,
    #[serde(default)]
    pub minutes: Option<StatTotal>,
    #[serde(rename = "plusMinus", default)]
    pub plus_minus: Option<StatTotal>,
    #[serde(rename = "fieldGoals", default)]
    pub field_goals: Option<ShootingSplit>,
    #[serde(rename = "threePointers", default)]
    pub three_pointers: Option<ShootingSplit>,
    #[serde(rename = "freeThrows", default)]
    pub free_throws: Option<ShootingSplit>,
}

fn total_of(stat: &Option<StatTotal>) -> f64 {
    stat.as_ref().and_then(|s| s.total).unwrap_or(0.0)
}

fn pct_of(split: &Option<ShootingSplit>) -> f64 {
    split.as_ref().and_then(|s| s.percentage).unwrap_or(0.0)
}

impl PlayerStatisticsRaw {
    pub fn player_id(&self) -> Option<PlayerId> {
        self.player.as_ref().and_then(|p| p.id)
    }

    pub fn games_played(&self) -> f64 {
        self.games.as_ref().and_then(|g| g.played).unwrap_or(0.0)
    }

    pub fn points_total(&self) -> f64 {
        total_of(&self.points)
    }

    pub fn rebounds_total(&self) -> f64 {
        total_of(&self.rebounds)
    }

    pub fn assists_total(&self) -> f64 {
        total_of(&self.assists)
    }

    pub fn steals_total(&self) -> f64 {
        total_of(&self.steals)
    }

    pub fn blocks_total(&self) -> f64 {
        total_of(&self.blocks)
    }

    pub fn minutes_total(&self) -> f64 {
        total_of(&self.minutes)
    }

    pub fn plus_minus_total(&self) -> f64 {
        total_of(&self.plus_minus)
    }

    pub fn field_goal_pct(&self) -> f64 {
        pct_of(&self.field_goals)
    }

    pub fn three_point_pct(&self) -> f64 {
        pct_of(&self.three_pointers)
    }

    pub fn free_throw_pct(&self) -> f64 {
        pct_of(&self.free_throws)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Country {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// League listing entry from `leagues`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
}

/// Team listing entry from `teams`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
}
