//! League and team listing commands

use std::fmt::Write as _;

use crate::{
    api::{
        types::{League, Team},
        StatsClient,
    },
    config::ApiConfig,
    LeagueId, Result, Season,
};

use super::resolve_season;

fn or_dash(s: &Option<String>) -> &str {
    s.as_deref().unwrap_or("-")
}

/// One line per league: id, name, type, country.
pub fn render_leagues(leagues: &[League]) -> String {
    let mut out = String::new();
    for l in leagues {
        let country = l.country.as_ref().map(|c| or_dash(&c.name)).unwrap_or("-");
        let _ = writeln!(
            out,
            "{:>6}  {} [{}] {}",
            l.id,
            or_dash(&l.name),
            or_dash(&l.kind),
            country
        );
    }
    out
}

/// One line per team: id and name.
pub fn render_teams(teams: &[Team]) -> String {
    let mut out = String::new();
    for t in teams {
        let _ = writeln!(out, "{:>6}  {}", t.id, or_dash(&t.name));
    }
    out
}

/// Handle the `leagues` command
pub async fn handle_leagues(as_json: bool) -> Result<()> {
    let client = StatsClient::new(ApiConfig::from_env())?;
    let leagues = client.get_leagues().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&leagues)?);
    } else {
        print!("{}", render_leagues(&leagues));
        println!("✓ {} leagues", leagues.len());
    }
    Ok(())
}

/// Handle the `teams` command. With `search`, league and season are optional
/// filters; without it they default from configuration.
pub async fn handle_teams(
    league: Option<LeagueId>,
    season: Option<Season>,
    search: Option<String>,
    as_json: bool,
) -> Result<()> {
    let config = ApiConfig::from_env();
    let client = StatsClient::new(config.clone())?;

    let teams = match search {
        Some(query) => {
            client
                .search_teams(&query, league, season.as_ref())
                .await?
        }
        None => {
            let league = league.unwrap_or(config.default_league_id);
            let season = resolve_season(season, &config);
            client.get_teams(league, &season).await?
        }
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
    } else {
        print!("{}", render_teams(&teams));
        println!("✓ {} teams", teams.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Country;

    #[test]
    fn test_render_leagues() {
        let leagues = vec![League {
            id: 12,
            name: Some("NCAA".to_string()),
            kind: Some("League".to_string()),
            logo: None,
            country: Some(Country {
                name: Some("USA".to_string()),
                code: Some("US".to_string()),
            }),
        }];

        assert_eq!(render_leagues(&leagues), "    12  NCAA [League] USA\n");
    }

    #[test]
    fn test_render_leagues_missing_fields() {
        let leagues = vec![League {
            id: 1,
            name: None,
            kind: None,
            logo: None,
            country: None,
        }];

        assert_eq!(render_leagues(&leagues), "     1  - [-] -\n");
    }

    #[test]
    fn test_render_teams() {
        let teams = vec![
            Team {
                id: 2000,
                name: Some("Duke".to_string()),
                logo: None,
                country: None,
            },
            Team {
                id: 2001,
                name: None,
                logo: None,
                country: None,
            },
        ];

        assert_eq!(render_teams(&teams), "  2000  Duke\n  2001  -\n");
    }
}
