//! Season labels as used by the statistics provider.

use crate::error::DukeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season label.
///
/// The provider accepts both single years (`2024`) and spans (`2023-2024`),
/// so the label is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub String);

impl Season {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no season has been selected.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for Season {
    fn default() -> Self {
        Self("2024".to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DukeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_default() {
        assert_eq!(Season::default().as_str(), "2024");
    }

    #[test]
    fn test_season_span_label() {
        let season: Season = "2023-2024".parse().unwrap();
        assert_eq!(season.to_string(), "2023-2024");
    }

    #[test]
    fn test_season_is_empty() {
        assert!(Season::new("  ").is_empty());
        assert!(!Season::new("2024").is_empty());
    }
}
