use serde::{Deserialize, Serialize};

use crate::lenient;

pub const DEFAULT_MAX_PLAYERS: u32 = 32;
pub const DEFAULT_REGION: &str = "EU West";

/// `/servers/list` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerListResponse {
    #[serde(default, deserialize_with = "lenient::int")]
    pub ts: i64,
    #[serde(default)]
    pub servers: Vec<RawServer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawServer {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub ok: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub host: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub port: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub server_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub map: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub players_connected: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_players: i64,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    Online,
    Unreachable,
}

/// Display row for one game server. Rows have no identity across polls.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEntry {
    pub name: String,
    pub map: String,
    pub current_players: u32,
    pub max_players: u32,
    /// The roster endpoint does not measure latency.
    pub ping_ms: Option<u32>,
    pub region: String,
    pub status: ServerStatus,
    pub address: String,
}

impl ServerEntry {
    pub fn players_label(&self) -> String {
        format!("{}/{}", self.current_players, self.max_players)
    }

    /// Protocol-handler URI that hands the join off to the game client.
    pub fn connect_uri(&self) -> String {
        format!("steam://connect/{}", self.address)
    }
}

impl From<&RawServer> for ServerEntry {
    fn from(raw: &RawServer) -> Self {
        let current_players = u32::try_from(raw.players_connected.max(0)).unwrap_or(0);
        let max_players = match u32::try_from(raw.total_players) {
            Ok(0) | Err(_) => DEFAULT_MAX_PLAYERS,
            Ok(n) => n,
        };
        Self {
            name: raw
                .server_name
                .clone()
                .unwrap_or_else(|| "Unknown Server".to_string()),
            map: raw.map.clone().unwrap_or_else(|| "Unknown Map".to_string()),
            current_players,
            max_players,
            ping_ms: None,
            region: DEFAULT_REGION.to_string(),
            status: if raw.ok {
                ServerStatus::Online
            } else {
                ServerStatus::Unreachable
            },
            address: format!("{}:{}", raw.host, raw.port),
        }
    }
}

impl ServerListResponse {
    /// Reachable servers only, in roster order.
    pub fn online_entries(&self) -> Vec<ServerEntry> {
        self.servers
            .iter()
            .filter(|server| server.ok)
            .map(ServerEntry::from)
            .collect()
    }
}
