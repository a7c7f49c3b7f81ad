//! Fixed roster served when live data cannot be loaded.

use std::sync::LazyLock;

use crate::stats::{
    compute::{aggregate_team_averages, calculate_hype_index},
    types::{PerGameRates, PlayerDerived, RecentForm, TeamAverages},
};

struct MockEntry {
    id: &'static str,
    name: &'static str,
    number: &'static str,
    position: &'static str,
    height: &'static str,
    weight: &'static str,
    pts: f64,
    reb: f64,
    ast: f64,
}

const ROSTER: [MockEntry; 5] = [
    MockEntry {
        id: "mock-3",
        name: "Cooper Flagg",
        number: "3",
        position: "Forward",
        height: "6'9\"",
        weight: "205 lbs",
        pts: 18.4,
        reb: 8.1,
        ast: 3.6,
    },
    MockEntry {
        id: "mock-5",
        name: "Tyrese Proctor",
        number: "5",
        position: "Guard",
        height: "6'5\"",
        weight: "190 lbs",
        pts: 14.2,
        reb: 3.4,
        ast: 5.8,
    },
    MockEntry {
        id: "mock-0",
        name: "Jared McCain",
        number: "0",
        position: "Guard",
        height: "6'4\"",
        weight: "200 lbs",
        pts: 16.1,
        reb: 4.3,
        ast: 2.9,
    },
    MockEntry {
        id: "mock-30",
        name: "Kyle Filipowski",
        number: "30",
        position: "Forward",
        height: "7'0\"",
        weight: "248 lbs",
        pts: 17.7,
        reb: 9.0,
        ast: 3.1,
    },
    MockEntry {
        id: "mock-1",
        name: "Caleb Foster",
        number: "1",
        position: "Guard",
        height: "6'5\"",
        weight: "195 lbs",
        pts: 11.8,
        reb: 2.6,
        ast: 2.7,
    },
];

static MOCK_PLAYERS: LazyLock<Vec<PlayerDerived>> = LazyLock::new(|| {
    ROSTER
        .iter()
        .map(|e| PlayerDerived {
            id: e.id.to_string(),
            name: e.name.to_string(),
            number: Some(e.number.to_string()),
            position: Some(e.position.to_string()),
            height: Some(e.height.to_string()),
            weight: Some(e.weight.to_string()),
            photo_url: None,
            team_logo: None,
            per_game: PerGameRates {
                pts: e.pts,
                reb: e.reb,
                ast: e.ast,
                ..PerGameRates::default()
            },
            last5: RecentForm {
                pts: e.pts,
                reb: e.reb,
                ast: e.ast,
            },
        })
        .collect()
});

/// The mock roster.
pub fn mock_players() -> Vec<PlayerDerived> {
    MOCK_PLAYERS.clone()
}

pub fn mock_team_averages() -> TeamAverages {
    aggregate_team_averages(&MOCK_PLAYERS)
}

pub fn mock_hype_index() -> u8 {
    calculate_hype_index(&MOCK_PLAYERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_roster_size() {
        assert_eq!(mock_players().len(), 5);
    }

    #[test]
    fn test_mock_ids_unique() {
        let players = mock_players();
        let mut ids: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), players.len());
    }

    #[test]
    fn test_mock_team_averages() {
        let avg = mock_team_averages();
        // (18.4 + 14.2 + 16.1 + 17.7 + 11.8) / 5 = 15.64
        assert_eq!(avg.pts, 15.6);
        // (8.1 + 3.4 + 4.3 + 9.0 + 2.6) / 5 = 5.48
        assert_eq!(avg.reb, 5.5);
        // (3.6 + 5.8 + 2.9 + 3.1 + 2.7) / 5 = 3.62
        assert_eq!(avg.ast, 3.6);
        assert_eq!(avg.fg_pct, 0.0);
    }

    #[test]
    fn test_mock_hype_index() {
        // 15.6/30*40 + 5.5/15*20 + 3.6/10*20 = 20.8 + 7.33 + 7.2
        assert_eq!(mock_hype_index(), 35);
    }
}
