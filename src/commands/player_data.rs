//! Player data loading and presentation.
//!
//! [`load_players_data`] is the boundary between the provider and the rest of
//! the program: it fetches profiles and statistics concurrently, derives the
//! per-player and team figures, and resolves every failure to the mock roster
//! with `using_mock_data` set and the error message kept for display.
//!
//! A refetch is just another call with the same arguments; the client's
//! response cache decides whether it reaches the network.

use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, warn};

use crate::{
    api::StatsClient,
    config::ApiConfig,
    stats::{
        aggregate_team_averages, calculate_hype_index, format_share_text,
        merge_profiles_with_stats,
        mock::{mock_hype_index, mock_players, mock_team_averages},
        normalize_for_radar, top_performers, PlayerDerived, RadarVector, TeamAverages,
    },
    DukeError, Result, Season, TeamId,
};

use super::{resolve_season, resolve_team_id};

/// How many players the summary highlights.
pub const TOP_PERFORMER_COUNT: usize = 3;

/// Everything the player view needs, live or mock.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersData {
    pub players: Vec<PlayerDerived>,
    pub team_averages: TeamAverages,
    pub hype_index: u8,
    pub top_performers: Vec<PlayerDerived>,
    pub using_mock_data: bool,
    pub error: Option<String>,
}

impl PlayersData {
    fn live(players: Vec<PlayerDerived>) -> Self {
        Self {
            team_averages: aggregate_team_averages(&players),
            hype_index: calculate_hype_index(&players),
            top_performers: top_performers(&players, TOP_PERFORMER_COUNT),
            players,
            using_mock_data: false,
            error: None,
        }
    }

    fn mock(error: String) -> Self {
        let players = mock_players();
        Self {
            team_averages: mock_team_averages(),
            hype_index: mock_hype_index(),
            top_performers: top_performers(&players, TOP_PERFORMER_COUNT),
            players,
            using_mock_data: true,
            error: Some(error),
        }
    }

    /// No team or season selected: nothing to show, placeholders for the summary.
    fn unselected() -> Self {
        Self {
            players: Vec::new(),
            team_averages: mock_team_averages(),
            hype_index: mock_hype_index(),
            top_performers: Vec::new(),
            using_mock_data: false,
            error: None,
        }
    }
}

/// Fetch profiles and statistics together and merge them.
///
/// Either request failing fails the whole; an empty merge is an error too.
pub async fn fetch_live_players(
    client: &StatsClient,
    team: TeamId,
    season: &Season,
) -> Result<Vec<PlayerDerived>> {
    if !client.is_api_available() {
        return Err(DukeError::Unavailable);
    }

    let (profiles, statistics) = tokio::try_join!(
        client.get_players(team, season),
        client.get_player_statistics(team, season)
    )?;

    let players = merge_profiles_with_stats(&profiles, &statistics);
    if players.is_empty() {
        return Err(DukeError::NoPlayers);
    }
    Ok(players)
}

/// Load the player view for `team` and `season`, falling back to mock data.
pub async fn load_players_data(
    client: &StatsClient,
    team: Option<TeamId>,
    season: &Season,
) -> PlayersData {
    let Some(team) = team.filter(|_| !season.is_empty()) else {
        return PlayersData::unselected();
    };

    match fetch_live_players(client, team, season).await {
        Ok(players) => {
            info!(
                "Loaded {} players for team {} season {}",
                players.len(),
                team,
                season
            );
            PlayersData::live(players)
        }
        Err(e) => {
            warn!("API failed, using mock data: {}", e);
            PlayersData::mock(e.to_string())
        }
    }
}

/// Options for the `players` command.
#[derive(Debug, Default)]
pub struct PlayerDataParams {
    pub team: Option<TeamId>,
    pub season: Option<Season>,
    pub as_json: bool,
    pub share: bool,
    pub radar: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerReport<'a> {
    #[serde(flatten)]
    player: &'a PlayerDerived,
    #[serde(skip_serializing_if = "Option::is_none")]
    radar: Option<RadarVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayersReport<'a> {
    season: &'a Season,
    players: Vec<PlayerReport<'a>>,
    team_averages: &'a TeamAverages,
    hype_index: u8,
    top_performers: Vec<&'a str>,
    using_mock_data: bool,
    error: Option<&'a str>,
}

/// Render the player view as pretty JSON.
pub fn render_players_json(
    data: &PlayersData,
    season: &Season,
    share: bool,
    radar: bool,
) -> Result<String> {
    let report = PlayersReport {
        season,
        players: data
            .players
            .iter()
            .map(|p| PlayerReport {
                player: p,
                radar: radar.then(|| normalize_for_radar(p)),
                share_text: share.then(|| format_share_text(p, season.as_str())),
            })
            .collect(),
        team_averages: &data.team_averages,
        hype_index: data.hype_index,
        top_performers: data.top_performers.iter().map(|p| p.name.as_str()).collect(),
        using_mock_data: data.using_mock_data,
        error: data.error.as_deref(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render the player view as text lines.
pub fn render_players_text(data: &PlayersData, season: &Season, share: bool, radar: bool) -> String {
    let mut out = String::new();

    if data.using_mock_data {
        let _ = writeln!(
            out,
            "⚠ Using mock data: {}",
            data.error.as_deref().unwrap_or("unknown error")
        );
    }

    let avg = &data.team_averages;
    let _ = writeln!(
        out,
        "Team averages (Season {}): {:.1} PTS | {:.1} REB | {:.1} AST | {:.1} STL | {:.1} BLK | FG% {:.1} | 3P% {:.1} | FT% {:.1}",
        season, avg.pts, avg.reb, avg.ast, avg.stl, avg.blk, avg.fg_pct, avg.tp_pct, avg.ft_pct
    );
    let _ = writeln!(out, "Hype index: {}/100", data.hype_index);

    if !data.top_performers.is_empty() {
        let top: Vec<String> = data
            .top_performers
            .iter()
            .map(|p| format!("{} ({:.1})", p.name, p.per_game.pts))
            .collect();
        let _ = writeln!(out, "Top performers: {}", top.join(", "));
    }

    for p in &data.players {
        let pg = &p.per_game;
        let _ = writeln!(
            out,
            "#{:<3} {} ({}) {:.1} PTS | {:.1} REB | {:.1} AST | {:.1} STL | {:.1} BLK | {:.1} MIN",
            p.number.as_deref().unwrap_or("-"),
            p.name,
            p.position.as_deref().unwrap_or("?"),
            pg.pts,
            pg.reb,
            pg.ast,
            pg.stl,
            pg.blk,
            pg.min
        );
        if share {
            let _ = writeln!(out, "     {}", format_share_text(p, season.as_str()));
        }
        if radar {
            let r = normalize_for_radar(p);
            let _ = writeln!(
                out,
                "     radar: pts {:.2} reb {:.2} ast {:.2} stl {:.2} blk {:.2}",
                r.pts, r.reb, r.ast, r.stl, r.blk
            );
        }
    }

    out
}

/// Handle the `players` command.
pub async fn handle_player_data(params: PlayerDataParams) -> Result<()> {
    let config = ApiConfig::from_env();
    let team = resolve_team_id(params.team, &config);
    let season = resolve_season(params.season, &config);

    if !config.is_config_valid() {
        warn!(
            "Incomplete configuration; missing: {:?}",
            config.missing_config()
        );
    }

    let client = StatsClient::new(config)?;
    let data = load_players_data(&client, team, &season).await;

    if params.as_json {
        println!(
            "{}",
            render_players_json(&data, &season, params.share, params.radar)?
        );
    } else {
        print!(
            "{}",
            render_players_text(&data, &season, params.share, params.radar)
        );
    }

    Ok(())
}
