use serde::Serialize;

/// Season totals divided by games played; percentages passed through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerGameRates {
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub fg_pct: f64,
    pub tp_pct: f64,
    pub ft_pct: f64,
    pub min: f64,
    pub plus_minus: f64,
}

/// Recent-form line. The provider has no game log here, so it mirrors the
/// season rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RecentForm {
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
}

/// A player profile merged with its derived rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDerived {
    pub id: String,
    pub name: String,
    pub number: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub photo_url: Option<String>,
    pub team_logo: Option<String>,
    pub per_game: PerGameRates,
    pub last5: RecentForm,
}

/// Team-wide mean of each per-game rate, to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAverages {
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub fg_pct: f64,
    pub tp_pct: f64,
    pub ft_pct: f64,
}

/// Five key rates scaled to [0, 1] for a radar chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RadarVector {
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
}

impl RadarVector {
    /// Components in chart order: pts, reb, ast, stl, blk.
    pub fn as_array(&self) -> [f64; 5] {
        [self.pts, self.reb, self.ast, self.stl, self.blk]
    }
}
