use serde::{Deserialize, Serialize};

use crate::filter::contains_ci;
use crate::lenient;

/// Catalog entry from `/surf/maps/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub tier: String,
    /// Number of bonus tracks.
    #[serde(default, deserialize_with = "lenient::int")]
    pub bonus: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub style: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapListResponse {
    #[serde(default)]
    pub maps: Vec<MapInfo>,
}

pub fn filter_maps(maps: &[MapInfo], term: &str) -> Vec<MapInfo> {
    maps.iter()
        .filter(|map| contains_ci(&map.name, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_catalog_and_filters_by_name() {
        let list: MapListResponse = serde_json::from_value(json!({
            "count": 3,
            "maps": [
                { "name": "surf_utopia_v5", "tier": "1", "bonus": 2, "style": "Linear" },
                { "name": "surf_mesa", "tier": 3, "bonus": "0", "style": "Staged" },
                { "name": "surf_Kitsune", "tier": "4", "style": "Staged" }
            ]
        }))
        .unwrap();
        assert_eq!(list.maps[1].tier, "3");
        assert_eq!(list.maps[2].bonus, 0);

        let hits = filter_maps(&list.maps, "KITS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "surf_Kitsune");
        assert_eq!(filter_maps(&list.maps, "").len(), 3);
    }
}
