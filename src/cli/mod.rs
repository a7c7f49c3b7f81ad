//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, Season, TeamId};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Players with per-game rates, team averages and hype index.
    ///
    /// Falls back to a built-in roster when the API cannot be reached.
    Players {
        /// Team ID (or set `DEFAULT_TEAM_ID` env var).
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Season label, e.g. 2024 or 2023-2024 (or set `DEFAULT_SEASON`).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Include a one-line shareable summary per player.
        #[clap(long)]
        share: bool,

        /// Include radar-chart values (0-1) per player.
        #[clap(long)]
        radar: bool,
    },

    /// List leagues known to the provider.
    Leagues {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List or search teams.
    Teams {
        /// League ID (or set `DEFAULT_LEAGUE_ID` env var).
        #[clap(long, short)]
        league: Option<LeagueId>,

        /// Season label (or set `DEFAULT_SEASON`).
        #[clap(long, short)]
        season: Option<Season>,

        /// Team name search.
        #[clap(long)]
        search: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "dukembb", about = "Duke basketball stats from the command line")]
pub struct DukeMbb {
    /// Mirror logs to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Directory for log files (defaults to the user cache dir).
    #[clap(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the statistics provider
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_players_command() {
        let app = DukeMbb::try_parse_from([
            "dukembb", "get", "players", "--team", "2000", "--season", "2024", "--json", "--radar",
        ])
        .unwrap();

        match app.command {
            Commands::Get {
                cmd:
                    GetCmd::Players {
                        team,
                        season,
                        json,
                        share,
                        radar,
                    },
            } => {
                assert_eq!(team, Some(TeamId::new(2000)));
                assert_eq!(season, Some(Season::new("2024")));
                assert!(json);
                assert!(!share);
                assert!(radar);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_teams_search() {
        let app =
            DukeMbb::try_parse_from(["dukembb", "-v", "get", "teams", "--search", "Duke"]).unwrap();

        assert!(app.verbose);
        match app.command {
            Commands::Get {
                cmd: GetCmd::Teams { search, league, .. },
            } => {
                assert_eq!(search.as_deref(), Some("Duke"));
                assert_eq!(league, None);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_team_id_rejected() {
        let result = DukeMbb::try_parse_from(["dukembb", "get", "players", "--team", "duke"]);
        assert!(result.is_err());
    }
}
