//! Typed descriptions of the statistics API endpoints the dashboard reads.

use crate::catalog::{Mode, RecordFilter, Style, Track};

/// One GET endpoint, with everything needed to build its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ServerList,
    Latest,
    TopPoints,
    Stats,
    Search {
        query: String,
    },
    TopMap {
        map: String,
        filter: RecordFilter,
        steam_id: Option<String>,
    },
    TopExternal {
        map: String,
        track: Track,
        style: Style,
    },
    MapList,
    Avatar {
        steam_id: String,
    },
    Profile {
        steam_id: String,
    },
}

impl Endpoint {
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::ServerList => vec!["servers", "list"],
            Endpoint::Latest => vec!["surf", "latest"],
            Endpoint::TopPoints => vec!["surf", "top-points"],
            Endpoint::Stats => vec!["surf", "stats"],
            Endpoint::Search { .. } => vec!["surf", "search"],
            Endpoint::TopMap { map, .. } => vec!["surf", "top-map", map.as_str()],
            Endpoint::TopExternal { map, .. } => vec!["surf", "top-external", map.as_str()],
            Endpoint::MapList => vec!["surf", "maps", "list"],
            Endpoint::Avatar { steam_id } => vec!["avatar", steam_id.as_str()],
            Endpoint::Profile { steam_id } => vec!["profile", steam_id.as_str()],
        }
    }

    /// Query pairs; filter values equal to their server-side default are omitted.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        match self {
            Endpoint::Search { query } => pairs.push(("q", query.clone())),
            Endpoint::TopMap {
                filter, steam_id, ..
            } => {
                if let Some(bonus) = filter.track.bonus_number() {
                    pairs.push(("bonus", bonus.to_string()));
                }
                if !filter.style.is_normal() {
                    pairs.push(("style", filter.style.value()));
                }
                if filter.mode != Mode::Standard {
                    pairs.push(("mode", filter.mode.label().to_string()));
                }
                if let Some(id) = steam_id {
                    pairs.push(("steamid", id.clone()));
                }
            }
            Endpoint::TopExternal { track, style, .. } => {
                if let Some(bonus) = track.bonus_number() {
                    pairs.push(("bonus", bonus.to_string()));
                }
                if !style.is_normal() {
                    pairs.push(("style", style.name()));
                }
            }
            _ => {}
        }
        pairs
    }

    /// Join `base` with the encoded path and query.
    pub fn url_with(&self, base: &str, encode: impl Fn(&str) -> String) -> String {
        let mut url = base.trim_end_matches('/').to_string();
        for segment in self.segments() {
            url.push('/');
            url.push_str(&encode(segment));
        }
        let query = self.query();
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&encode(value));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        s.to_string()
    }

    fn spaces(s: &str) -> String {
        s.replace(' ', "%20")
    }

    #[test]
    fn fixed_endpoints_have_stable_paths() {
        assert_eq!(Endpoint::ServerList.url_with("https://api.test", plain), "https://api.test/servers/list");
        assert_eq!(Endpoint::Latest.url_with("/api/", plain), "/api/surf/latest");
        assert_eq!(Endpoint::MapList.url_with("", plain), "/surf/maps/list");
        assert_eq!(
            Endpoint::Profile { steam_id: "7656".into() }.url_with("", plain),
            "/profile/7656"
        );
    }

    #[test]
    fn top_map_omits_default_filters() {
        let endpoint = Endpoint::TopMap {
            map: "surf_utopia".into(),
            filter: RecordFilter::default(),
            steam_id: None,
        };
        assert!(endpoint.query().is_empty());
        assert_eq!(endpoint.url_with("", plain), "/surf/top-map/surf_utopia");
    }

    #[test]
    fn top_map_carries_track_style_mode_and_player() {
        let endpoint = Endpoint::TopMap {
            map: "surf_utopia".into(),
            filter: RecordFilter {
                track: Track(2),
                style: Style(1),
                mode: Mode::Tick128,
            },
            steam_id: Some("76561198000000001".into()),
        };
        assert_eq!(
            endpoint.url_with("", plain),
            "/surf/top-map/surf_utopia?bonus=2&style=1&mode=128t&steamid=76561198000000001"
        );
    }

    #[test]
    fn top_external_sends_style_by_name() {
        let endpoint = Endpoint::TopExternal {
            map: "surf_mesa".into(),
            track: Track::MAIN,
            style: Style(1),
        };
        assert_eq!(
            endpoint.url_with("", spaces),
            "/surf/top-external/surf_mesa?style=Low%20gravity"
        );
    }

    #[test]
    fn search_encodes_query_value() {
        let endpoint = Endpoint::Search {
            query: "big wave".into(),
        };
        assert_eq!(endpoint.url_with("", spaces), "/surf/search?q=big%20wave");
    }
}
