use serde::{Deserialize, Serialize};

use crate::filter::contains_ci;
use crate::lenient;

fn default_mode() -> String {
    crate::catalog::Mode::Standard.label().to_string()
}

/// Best or most recent run on one map, as listed on a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub map_name: String,
    #[serde(default = "default_mode", deserialize_with = "lenient::mode")]
    pub mode: String,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub style: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub timer_ticks: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub formatted_time: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub last_finished: i64,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub position: Option<i64>,
}

impl ProfileRecord {
    /// Free-text filter over map name or mode.
    pub fn matches(&self, query: &str) -> bool {
        contains_ci(&self.map_name, query) || contains_ci(&self.mode, query)
    }
}

/// `/profile/{id}` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default, deserialize_with = "lenient::string")]
    pub steamid: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub playername: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub global_points: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub rank: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_runs: i64,
    #[serde(default)]
    pub recent_maps: Vec<ProfileRecord>,
    #[serde(default)]
    pub records_top: Vec<ProfileRecord>,
}

impl ProfileSummary {
    /// Players with no finished run have no stored name; show the id instead.
    pub fn display_name(&self) -> &str {
        self.playername.as_deref().unwrap_or(&self.steamid)
    }

    pub fn filtered_recent(&self, query: &str) -> Vec<ProfileRecord> {
        filter_records(&self.recent_maps, query)
    }

    pub fn filtered_top(&self, query: &str) -> Vec<ProfileRecord> {
        filter_records(&self.records_top, query)
    }
}

fn filter_records(records: &[ProfileRecord], query: &str) -> Vec<ProfileRecord> {
    records
        .iter()
        .filter(|record| record.matches(query))
        .cloned()
        .collect()
}

/// Leaderboard placement badge: medals for the podium, `#n` below it.
pub fn position_badge(position: Option<i64>) -> String {
    match position {
        Some(1) => "🥇".to_string(),
        Some(2) => "🥈".to_string(),
        Some(3) => "🥉".to_string(),
        Some(n) if n > 0 => format!("#{n}"),
        _ => "#-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary() -> ProfileSummary {
        serde_json::from_value(json!({
            "steamid": "76561198000000001",
            "playername": "kai",
            "global_points": 15420,
            "rank": 3,
            "total_runs": 156,
            "recent_maps": [
                { "MapName": "surf_utopia", "TimerTicks": 1000, "FormattedTime": "00:15.625",
                  "LastFinished": "1700000000", "Position": 1 },
                { "MapName": "surf_mesa", "Mode": "Bhop", "TimerTicks": 4000,
                  "FormattedTime": "01:02.500", "LastFinished": 1700000500, "Position": null }
            ],
            "records_top": [
                { "MapName": "surf_kitsune", "TimerTicks": 2000, "FormattedTime": "00:31.250",
                  "LastFinished": 1699990000, "Position": 2 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn decodes_profile_with_defaults() {
        let profile = summary();
        assert_eq!(profile.display_name(), "kai");
        assert_eq!(profile.recent_maps[0].mode, "Standard");
        assert_eq!(profile.recent_maps[0].last_finished, 1_700_000_000);
        assert_eq!(profile.recent_maps[1].position, None);
    }

    #[test]
    fn null_mode_in_recent_maps_reads_as_standard() {
        let profile: ProfileSummary = serde_json::from_value(json!({
            "steamid": "76561198000000001",
            "recent_maps": [{ "MapName": "surf_a", "Mode": null }]
        }))
        .unwrap();
        assert_eq!(profile.recent_maps.len(), 1);
        assert_eq!(profile.recent_maps[0].map_name, "surf_a");
        assert_eq!(profile.recent_maps[0].mode, "Standard");
        assert_eq!(profile.filtered_recent("standard").len(), 1);
    }

    #[test]
    fn missing_player_name_falls_back_to_id() {
        let profile: ProfileSummary =
            serde_json::from_value(json!({ "steamid": 42, "playername": null })).unwrap();
        assert_eq!(profile.display_name(), "42");
        assert!(profile.recent_maps.is_empty());
    }

    #[test]
    fn filters_records_by_map_or_mode() {
        let profile = summary();
        assert_eq!(profile.filtered_recent("").len(), 2);
        assert_eq!(profile.filtered_recent("MESA").len(), 1);
        assert_eq!(profile.filtered_recent("bhop")[0].map_name, "surf_mesa");
        assert_eq!(profile.filtered_recent("standard")[0].map_name, "surf_utopia");
        assert!(profile.filtered_top("utopia").is_empty());
    }

    #[test]
    fn position_badges() {
        assert_eq!(position_badge(Some(1)), "🥇");
        assert_eq!(position_badge(Some(3)), "🥉");
        assert_eq!(position_badge(Some(12)), "#12");
        assert_eq!(position_badge(None), "#-");
    }
}
