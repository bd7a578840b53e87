//! Fixed selector vocabularies shared by the leaderboard, map and profile views.

use serde::{Deserialize, Serialize};

const MAP_PICTURES_BASE: &str =
    "https://raw.githubusercontent.com/bnt0p/MapPictures/refs/heads/main/pics";
pub const MAP_PLACEHOLDER: &str = "/placeholder.svg";

/// Preview image for a map; callers swap in [`MAP_PLACEHOLDER`] on load error.
pub fn map_preview_url(map_name: &str) -> String {
    format!("{MAP_PICTURES_BASE}/{map_name}.jpg")
}

/// Main route (`0`) or a numbered bonus route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Track(pub u8);

impl Track {
    pub const MAIN: Track = Track(0);
    pub const MAX_BONUS: u8 = 10;

    pub fn all() -> impl Iterator<Item = Track> {
        (0..=Self::MAX_BONUS).map(Track)
    }

    pub fn is_main(self) -> bool {
        self.0 == 0
    }

    pub fn bonus_number(self) -> Option<u8> {
        (!self.is_main()).then_some(self.0)
    }

    /// Select-box value: `"0"` for the main route, bonus number otherwise.
    pub fn value(self) -> String {
        self.0.to_string()
    }

    /// Accepts `"0"`..`"10"` as well as `"main"` / `"bonusN"`.
    pub fn parse(raw: &str) -> Option<Track> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("main") {
            return Some(Track::MAIN);
        }
        let digits = raw.strip_prefix("bonus").unwrap_or(raw);
        let n = digits.parse::<u8>().ok()?;
        (n <= Self::MAX_BONUS).then_some(Track(n))
    }
}

const STYLE_NAMES: [&str; 11] = [
    "Normal",
    "Low gravity",
    "Sideways",
    "Only W",
    "400 Vel",
    "High Gravity",
    "Only A",
    "Only D",
    "Only S",
    "Half Sideways",
    "Fast Forward",
];

/// Movement-rule variant, identified by the numeric id the records carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style(pub u8);

impl Style {
    pub const NORMAL: Style = Style(0);

    pub fn all() -> impl Iterator<Item = Style> {
        (0..STYLE_NAMES.len() as u8).map(Style)
    }

    pub fn is_normal(self) -> bool {
        self.0 == 0
    }

    pub fn value(self) -> String {
        self.0.to_string()
    }

    /// Name used by the external ranking service; unknown ids echo the number.
    pub fn name(self) -> String {
        STYLE_NAMES
            .get(self.0 as usize)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| self.0.to_string())
    }

    pub fn parse(raw: &str) -> Option<Style> {
        let n = raw.trim().parse::<u8>().ok()?;
        ((n as usize) < STYLE_NAMES.len()).then_some(Style(n))
    }
}

/// Tick-rate / ruleset tag partitioning leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Standard,
    #[serde(rename = "85t")]
    Tick85,
    #[serde(rename = "102t")]
    Tick102,
    #[serde(rename = "128t")]
    Tick128,
    Source,
    Bhop,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Standard,
        Mode::Tick85,
        Mode::Tick102,
        Mode::Tick128,
        Mode::Source,
        Mode::Bhop,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Tick85 => "85t",
            Mode::Tick102 => "102t",
            Mode::Tick128 => "128t",
            Mode::Source => "Source",
            Mode::Bhop => "Bhop",
        }
    }

    pub fn parse(raw: &str) -> Option<Mode> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(raw))
    }
}

/// Track/style/mode selection applied to a per-map leaderboard request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFilter {
    pub track: Track,
    pub style: Style,
    pub mode: Mode,
}

/// Game-mode families shown as tabs in the server browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerCategory {
    Surf,
    Hns,
    Bhop,
    Kz,
}

impl ServerCategory {
    pub const ALL: [ServerCategory; 4] = [
        ServerCategory::Surf,
        ServerCategory::Hns,
        ServerCategory::Bhop,
        ServerCategory::Kz,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ServerCategory::Surf => "Surf",
            ServerCategory::Hns => "HNS",
            ServerCategory::Bhop => "Bhop",
            ServerCategory::Kz => "KZ",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            ServerCategory::Surf => "🏄",
            ServerCategory::Hns => "🕵️",
            ServerCategory::Bhop => "🐰",
            ServerCategory::Kz => "🧗",
        }
    }

    /// Only surf servers are reported by the roster endpoint today.
    pub const fn is_live(self) -> bool {
        matches!(self, ServerCategory::Surf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_parses_numeric_and_named_values() {
        assert_eq!(Track::parse("0"), Some(Track::MAIN));
        assert_eq!(Track::parse("main"), Some(Track::MAIN));
        assert_eq!(Track::parse("bonus3"), Some(Track(3)));
        assert_eq!(Track::parse("10"), Some(Track(10)));
        assert_eq!(Track::parse("11"), None);
        assert_eq!(Track::parse("bonus"), None);
    }

    #[test]
    fn track_lists_main_plus_ten_bonuses() {
        let tracks: Vec<Track> = Track::all().collect();
        assert_eq!(tracks.len(), 11);
        assert!(tracks[0].is_main());
        assert_eq!(tracks[10].bonus_number(), Some(10));
    }

    #[test]
    fn style_names_match_external_ranking_vocabulary() {
        assert_eq!(Style(0).name(), "Normal");
        assert_eq!(Style(1).name(), "Low gravity");
        assert_eq!(Style(4).name(), "400 Vel");
        assert_eq!(Style(10).name(), "Fast Forward");
        assert_eq!(Style(42).name(), "42");
        assert_eq!(Style::parse("11"), None);
    }

    #[test]
    fn mode_round_trips_through_labels_and_serde() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse(mode.label()), Some(mode));
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.label()));
        }
        assert_eq!(Mode::parse("bhop"), Some(Mode::Bhop));
        assert_eq!(Mode::parse("64t"), None);
    }

    #[test]
    fn only_surf_category_is_live() {
        let live: Vec<_> = ServerCategory::ALL
            .into_iter()
            .filter(|c| c.is_live())
            .collect();
        assert_eq!(live, vec![ServerCategory::Surf]);
    }

    #[test]
    fn map_preview_points_at_picture_repository() {
        assert!(map_preview_url("surf_utopia").ends_with("/pics/surf_utopia.jpg"));
    }
}
