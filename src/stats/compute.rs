use std::collections::HashMap;

use crate::{
    api::types::{PlayerProfile, PlayerStatisticsRaw},
    stats::types::{PerGameRates, PlayerDerived, RadarVector, RecentForm, TeamAverages},
    PlayerId,
};


/// Radar ceilings: a rate at or above these fills the axis.
pub const RADAR_MAX_PTS: f64 = 30.0;
pub const RADAR_MAX_REB: f64 = 15.0;
pub const RADAR_MAX_AST: f64 = 10.0;
pub const RADAR_MAX_STL: f64 = 3.0;
pub const RADAR_MAX_BLK: f64 = 3.0;

/// Hype index weights (sum to 100) against fixed ceilings.
const HYPE_WEIGHT_PTS: f64 = 40.0;
const HYPE_WEIGHT_REB: f64 = 20.0;
const HYPE_WEIGHT_AST: f64 = 20.0;
const HYPE_WEIGHT_FG: f64 = 20.0;
const HYPE_CEIL_PTS: f64 = 30.0;
const HYPE_CEIL_REB: f64 = 15.0;
const HYPE_CEIL_AST: f64 = 10.0;
const HYPE_CEIL_FG: f64 = 100.0;

pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Non-finite and negative values read as zero.
fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

fn per_game(total: f64, games: f64) -> f64 {
    if games > 0.0 {
        sanitize(total / games)
    } else {
        0.0
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// `v / ceiling` clamped to [0, 1]; NaN reads as zero.
fn unit_scale(v: f64, ceiling: f64) -> f64 {
    let scaled = v / ceiling;
    if scaled.is_nan() {
        0.0
    } else {
        scaled.clamp(0.0, 1.0)
    }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn display_name(profile: &PlayerProfile) -> String {
    match (non_blank(&profile.firstname), non_blank(&profile.lastname)) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        _ => non_blank(&profile.name)
            .unwrap_or(UNKNOWN_PLAYER)
            .to_string(),
    }
}

fn derive_rates(stats: Option<&PlayerStatisticsRaw>) -> PerGameRates {
    let Some(s) = stats else {
        return PerGameRates::default();
    };
    let games = s.games_played();

    PerGameRates {
        pts: per_game(s.points_total(), games),
        reb: per_game(s.rebounds_total(), games),
        ast: per_game(s.assists_total(), games),
        stl: per_game(s.steals_total(), games),
        blk: per_game(s.blocks_total(), games),
        fg_pct: sanitize(s.field_goal_pct()),
        tp_pct: sanitize(s.three_point_pct()),
        ft_pct: sanitize(s.free_throw_pct()),
        min: per_game(s.minutes_total(), games),
        plus_minus: per_game(s.plus_minus_total(), games),
    }
}

/// Merge profiles with statistics by player id and derive per-game rates.
///
/// Profiles without statistics get all-zero rates. Statistics without a
/// player id are ignored; for duplicate ids the last entry wins.
pub fn merge_profiles_with_stats(
    profiles: &[PlayerProfile],
    statistics: &[PlayerStatisticsRaw],
) -> Vec<PlayerDerived> {
    let by_id: HashMap<PlayerId, &PlayerStatisticsRaw> = statistics
        .iter()
        .filter_map(|s| s.player_id().map(|id| (id, s)))
        .collect();

    profiles
        .iter()
        .map(|profile| {
            let per_game = derive_rates(by_id.get(&profile.id).copied());
            PlayerDerived {
                id: profile.id.to_string(),
                name: display_name(profile),
                number: profile.number.clone(),
                position: profile.position.clone(),
                height: profile.height.clone(),
                weight: profile.weight.clone(),
                photo_url: profile.photo.clone(),
                team_logo: profile.team.as_ref().and_then(|t| t.logo.clone()),
                last5: RecentForm {
                    pts: per_game.pts,
                    reb: per_game.reb,
                    ast: per_game.ast,
                },
                per_game,
            }
        })
        .collect()
}

/// Mean of each per-game rate across `players`, rounded to one decimal.
pub fn aggregate_team_averages(players: &[PlayerDerived]) -> TeamAverages {
    if players.is_empty() {
        return TeamAverages::default();
    }

    let totals = players.iter().fold(TeamAverages::default(), |acc, p| {
        let pg = &p.per_game;
        TeamAverages {
            pts: acc.pts + sanitize(pg.pts),
            reb: acc.reb + sanitize(pg.reb),
            ast: acc.ast + sanitize(pg.ast),
            stl: acc.stl + sanitize(pg.stl),
            blk: acc.blk + sanitize(pg.blk),
            fg_pct: acc.fg_pct + sanitize(pg.fg_pct),
            tp_pct: acc.tp_pct + sanitize(pg.tp_pct),
            ft_pct: acc.ft_pct + sanitize(pg.ft_pct),
        }
    });

    let n = players.len() as f64;
    TeamAverages {
        pts: round1(totals.pts / n),
        reb: round1(totals.reb / n),
        ast: round1(totals.ast / n),
        stl: round1(totals.stl / n),
        blk: round1(totals.blk / n),
        fg_pct: round1(totals.fg_pct / n),
        tp_pct: round1(totals.tp_pct / n),
        ft_pct: round1(totals.ft_pct / n),
    }
}

/// Scale a player's five key rates to [0, 1].
pub fn normalize_for_radar(player: &PlayerDerived) -> RadarVector {
    let pg = &player.per_game;
    RadarVector {
        pts: unit_scale(pg.pts, RADAR_MAX_PTS),
        reb: unit_scale(pg.reb, RADAR_MAX_REB),
        ast: unit_scale(pg.ast, RADAR_MAX_AST),
        stl: unit_scale(pg.stl, RADAR_MAX_STL),
        blk: unit_scale(pg.blk, RADAR_MAX_BLK),
    }
}

/// Team hype score in [0, 100] from the rounded team averages.
pub fn calculate_hype_index(players: &[PlayerDerived]) -> u8 {
    if players.is_empty() {
        return 0;
    }

    let avg = aggregate_team_averages(players);
    let score = avg.pts / HYPE_CEIL_PTS * HYPE_WEIGHT_PTS
        + avg.reb / HYPE_CEIL_REB * HYPE_WEIGHT_REB
        + avg.ast / HYPE_CEIL_AST * HYPE_WEIGHT_AST
        + avg.fg_pct / HYPE_CEIL_FG * HYPE_WEIGHT_FG;

    if score.is_nan() {
        return 0;
    }
    score.clamp(0.0, 100.0).round() as u8
}

/// One-line shareable summary of a player's season.
///
/// Rates are rounded half up before formatting; `{:.1}` alone rounds ties to
/// even (12.25 would print as 12.2).
pub fn format_share_text(player: &PlayerDerived, season: &str) -> String {
    let pg = &player.per_game;
    format!(
        "{} — {:.1} PTS | {:.1} REB | {:.1} AST • FG% {} • 3P% {} • FT% {} (Season {})",
        player.name,
        round1(pg.pts),
        round1(pg.reb),
        round1(pg.ast),
        pg.fg_pct.round() as i64,
        pg.tp_pct.round() as i64,
        pg.ft_pct.round() as i64,
        season
    )
}

/// The `n` highest scorers by points per game; ties keep input order.
pub fn top_performers(players: &[PlayerDerived], n: usize) -> Vec<PlayerDerived> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| b.per_game.pts.total_cmp(&a.per_game.pts));
    ranked.truncate(n);
    ranked
}
