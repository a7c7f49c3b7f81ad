//! ID types for the basketball statistics API.

use crate::error::{DukeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for team IDs.
///
/// Keeps team IDs from being mixed up with league or player IDs when building
/// upstream queries.
///
/// # Examples
///
/// ```rust
/// use dukembb::TeamId;
///
/// let team_id = TeamId::new(2000);
/// assert_eq!(team_id.as_u32(), 2000);
/// assert_eq!(team_id.to_string(), "2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = DukeError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for league IDs (NCAA is 12 on API-Basketball).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for LeagueId {
    fn default() -> Self {
        Self(12)
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = DukeError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_parse() {
        let id: TeamId = "2000".parse().unwrap();
        assert_eq!(id, TeamId::new(2000));
    }

    #[test]
    fn test_team_id_parse_trims_whitespace() {
        let id: TeamId = " 42 ".parse().unwrap();
        assert_eq!(id.as_u32(), 42);
    }

    #[test]
    fn test_team_id_parse_invalid() {
        let result = "duke".parse::<TeamId>();
        assert!(matches!(result, Err(DukeError::InvalidId(_))));
    }

    #[test]
    fn test_league_id_default_is_ncaa() {
        assert_eq!(LeagueId::default().as_u32(), 12);
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(123456).to_string(), "123456");
    }

    #[test]
    fn test_player_id_serde_transparent_number() {
        let id: PlayerId = serde_json::from_str("77").unwrap();
        assert_eq!(id.as_u64(), 77);
    }
}
