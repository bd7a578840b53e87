pub mod api;
pub mod avatar;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod i18n;
pub mod lenient;
pub mod load;
pub mod maps;
pub mod paging;
pub mod profile;
pub mod records;
pub mod servers;

pub use api::Endpoint;
pub use avatar::{AvatarCache, AvatarResponse};
pub use catalog::{Mode, RecordFilter, ServerCategory, Style, Track};
pub use config::ClientConfig;
pub use debounce::{DebounceGate, RequestSeq};
pub use i18n::{Language, PreferenceStore};
pub use load::{FetchError, LoadState};
pub use maps::{MapInfo, MapListResponse};
pub use paging::Paginator;
pub use profile::{ProfileRecord, ProfileSummary};
pub use records::*;
pub use servers::{ServerEntry, ServerListResponse};
