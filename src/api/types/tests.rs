//! Unit tests for provider payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod lenient_field_tests {
    use super::*;

    #[test]
    fn test_percentage_accepts_numeric_string() {
        let split: ShootingSplit = serde_json::from_value(json!({"percentage": "47.3"})).unwrap();
        assert_eq!(split.percentage, Some(47.3));
    }

    #[test]
    fn test_percentage_accepts_percent_suffix() {
        let split: ShootingSplit = serde_json::from_value(json!({"percentage": "38.5%"})).unwrap();
        assert_eq!(split.percentage, Some(38.5));
    }

    #[test]
    fn test_percentage_accepts_number() {
        let split: ShootingSplit = serde_json::from_value(json!({"percentage": 81})).unwrap();
        assert_eq!(split.percentage, Some(81.0));
    }

    #[test]
    fn test_unparsable_percentage_is_absent() {
        let split: ShootingSplit = serde_json::from_value(json!({"percentage": "n/a"})).unwrap();
        assert_eq!(split.percentage, None);
    }

    #[test]
    fn test_null_total_is_absent() {
        let stat: StatTotal = serde_json::from_value(json!({"total": null})).unwrap();
        assert_eq!(stat.total, None);
    }

    #[test]
    fn test_profile_number_accepts_integer() {
        let profile: PlayerProfile =
            serde_json::from_value(json!({"id": 5, "number": 30})).unwrap();
        assert_eq!(profile.number.as_deref(), Some("30"));
    }
}

#[cfg(test)]
mod statistics_accessor_tests {
    use super::*;

    #[test]
    fn test_empty_statistics_read_as_zero() {
        let raw: PlayerStatisticsRaw = serde_json::from_value(json!({})).unwrap();

        assert_eq!(raw.player_id(), None);
        assert_eq!(raw.games_played(), 0.0);
        assert_eq!(raw.points_total(), 0.0);
        assert_eq!(raw.plus_minus_total(), 0.0);
        assert_eq!(raw.field_goal_pct(), 0.0);
    }

    #[test]
    fn test_full_statistics_block() {
        let raw: PlayerStatisticsRaw = serde_json::from_value(json!({
            "player": {"id": 42, "name": "Test Player"},
            "games": {"played": 10},
            "points": {"total": 184},
            "rebounds": {"total": 81},
            "assists": {"total": 36},
            "steals": {"total": 14},
            "blocks": {"total": 12},
            "minutes": {"total": 320},
            "plusMinus": {"total": 55},
            "fieldGoals": {"total": 70, "attempts": 150, "percentage": "46.7"},
            "threePointers": {"percentage": 35.2},
            "freeThrows": {"percentage": "80"}
        }))
        .unwrap();

        assert_eq!(raw.player_id(), Some(PlayerId::new(42)));
        assert_eq!(raw.games_played(), 10.0);
        assert_eq!(raw.points_total(), 184.0);
        assert_eq!(raw.rebounds_total(), 81.0);
        assert_eq!(raw.assists_total(), 36.0);
        assert_eq!(raw.steals_total(), 14.0);
        assert_eq!(raw.blocks_total(), 12.0);
        assert_eq!(raw.minutes_total(), 320.0);
        assert_eq!(raw.plus_minus_total(), 55.0);
        assert_eq!(raw.field_goal_pct(), 46.7);
        assert_eq!(raw.three_point_pct(), 35.2);
        assert_eq!(raw.free_throw_pct(), 80.0);
    }
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[test]
    fn test_envelope_with_profiles() {
        let env: Envelope<PlayerProfile> = serde_json::from_value(json!({
            "get": "players",
            "results": 1,
            "response": [{"id": 1, "firstname": "A", "lastname": "B"}]
        }))
        .unwrap();

        assert_eq!(env.response.len(), 1);
        assert_eq!(env.response[0].firstname.as_deref(), Some("A"));
    }

    #[test]
    fn test_envelope_missing_response() {
        let env: Envelope<League> = serde_json::from_value(json!({"results": 0})).unwrap();
        assert!(env.response.is_empty());
    }

    #[test]
    fn test_envelope_null_response_is_empty() {
        let env: Envelope<PlayerStatisticsRaw> =
            serde_json::from_value(json!({"errors": [], "response": null})).unwrap();
        assert!(env.response.is_empty());
    }

    #[test]
    fn test_envelope_non_list_response_is_empty() {
        let env: Envelope<PlayerProfile> =
            serde_json::from_value(json!({"response": {"id": 1}})).unwrap();
        assert!(env.response.is_empty());
    }

    #[test]
    fn test_envelope_skips_malformed_elements() {
        let env: Envelope<PlayerStatisticsRaw> = serde_json::from_value(json!({
            "response": [
                {"player": {"id": 1}, "games": {"played": 2}, "points": 12},
                {"player": {"id": 2}, "games": {"played": 2}, "points": {"total": 12}}
            ]
        }))
        .unwrap();

        assert_eq!(env.response.len(), 1);
        assert_eq!(env.response[0].player_id(), Some(PlayerId::new(2)));
        assert_eq!(env.response[0].points_total(), 12.0);
    }

    #[test]
    fn test_envelope_skips_profile_without_id() {
        let env: Envelope<PlayerProfile> = serde_json::from_value(json!({
            "response": [{"firstname": "No", "lastname": "Id"}, {"id": 9}]
        }))
        .unwrap();

        assert_eq!(env.response.len(), 1);
        assert_eq!(env.response[0].id, PlayerId::new(9));
    }

    #[test]
    fn test_league_type_field() {
        let league: League = serde_json::from_value(json!({
            "id": 12,
            "name": "NCAA",
            "type": "League",
            "country": {"name": "USA", "code": "US"}
        }))
        .unwrap();

        assert_eq!(league.kind.as_deref(), Some("League"));
        assert_eq!(
            league.country.and_then(|c| c.name).as_deref(),
            Some("USA")
        );
    }
}
