//! Record, ranking and search payloads served under `/surf/*`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::Mode;
use crate::lenient;

fn default_mode() -> String {
    Mode::Standard.label().to_string()
}

/// A single completed timed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SurfRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub map_name: String,
    #[serde(rename = "SteamID", default, deserialize_with = "lenient::string")]
    pub steam_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub player_name: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub timer_ticks: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub formatted_time: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub unix_stamp: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub times_finished: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub style: i64,
    #[serde(default = "default_mode", deserialize_with = "lenient::mode")]
    pub mode: String,
}

/// `/surf/latest` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestResponse {
    #[serde(default, deserialize_with = "lenient::int")]
    pub count: i64,
    #[serde(default)]
    pub records: Vec<SurfRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointsEntry {
    #[serde(rename = "SteamID", default, deserialize_with = "lenient::string")]
    pub steam_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub player_name: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub global_points: i64,
}

/// `/surf/top-points` payload; the server's ordering is the ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopPointsResponse {
    #[serde(default)]
    pub players: Vec<PointsEntry>,
}

/// `/surf/stats` payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default, deserialize_with = "lenient::int")]
    pub player_count: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_runs: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchMatch {
    #[serde(rename = "SteamID", default, deserialize_with = "lenient::string")]
    pub steam_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub player_name: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub last_seen: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub global_points: i64,
}

/// `/surf/search` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

/// `/surf/top-map/{map}` payload. The position fields are only present when
/// the request was scoped to one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapLeaderboard {
    #[serde(default)]
    pub records: Vec<SurfRecord>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub position: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub best_ticks: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub best_formatted: Option<String>,
}

impl MapLeaderboard {
    /// The player's standing when the scoped lookup found a run.
    pub fn player_standing(&self) -> Option<(i64, &str)> {
        let position = self.position.filter(|p| *p > 0)?;
        let best = self.best_formatted.as_deref().unwrap_or("");
        Some((position, best))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub position: usize,
    pub record: SurfRecord,
}

/// Keep records of one mode, renumber them from 1 and cap at `limit`.
pub fn rank_for_mode(records: &[SurfRecord], mode: Mode, limit: usize) -> Vec<RankedRecord> {
    records
        .iter()
        .filter(|record| record.mode.eq_ignore_ascii_case(mode.label()))
        .take(limit)
        .enumerate()
        .map(|(i, record)| RankedRecord {
            position: i + 1,
            record: record.clone(),
        })
        .collect()
}

/// Loosely shaped entry from the external global ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub player_name: String,
    /// Run duration in seconds.
    #[serde(default, deserialize_with = "lenient::float")]
    pub time: f64,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub replay: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `/surf/top-external/{map}` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalLeaderboard {
    #[serde(default)]
    pub data: Vec<ExternalRecord>,
}

/// Distinct ids in first-seen order, skipping blanks.
pub fn distinct_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Two-letter avatar fallback.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}
