use leptos::prelude::*;

use surf_shared::catalog::ServerCategory;
use surf_shared::servers::ServerStatus;
use surf_shared::{Endpoint, FetchError, ServerEntry, ServerListResponse};

use crate::config::ApiBase;
use crate::http::fetch_for;
use crate::i18n::use_i18n;
use crate::scope::{LatestRequest, ViewScope};
use crate::widgets::{EmptyState, MapPreview};

/// Roster refresh period while the server browser is mounted.
pub(crate) const SERVER_POLL_MS: u32 = 30_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LinkStatus {
    Connecting,
    Online,
    Disconnected,
}

impl LinkStatus {
    fn indicator(self) -> &'static str {
        match self {
            LinkStatus::Online => "🟢",
            LinkStatus::Connecting | LinkStatus::Disconnected => "🟡",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            LinkStatus::Connecting => "common.connecting",
            LinkStatus::Online => "common.online",
            LinkStatus::Disconnected => "serverbrowser.disconnected",
        }
    }
}

fn open_connect_uri(entry: &ServerEntry) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(&entry.connect_uri(), "_blank") {
        web_sys::console::warn_1(&e);
    }
}

/// Rows and badge after one roster poll. A failed poll shows no rows.
fn poll_outcome(result: Result<ServerListResponse, FetchError>) -> (Vec<ServerEntry>, LinkStatus) {
    match result {
        Ok(resp) => (resp.online_entries(), LinkStatus::Online),
        Err(_) => (Vec::new(), LinkStatus::Disconnected),
    }
}

/// Live server browser. Polls the roster while mounted; a failed poll clears
/// the rows and flips the status badge.
#[component]
pub fn ServerList() -> impl IntoView {
    let i18n = use_i18n();
    let ApiBase(api_base) = expect_context();
    let scope = ViewScope::new();
    let latest = LatestRequest::new();

    let servers: RwSignal<Vec<ServerEntry>> = RwSignal::new(Vec::new());
    let status: RwSignal<LinkStatus> = RwSignal::new(LinkStatus::Connecting);
    let refreshing: RwSignal<bool> = RwSignal::new(false);

    let load = move || {
        let ticket = latest.begin();
        let base = api_base.get_untracked();
        refreshing.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let Some(result) =
                fetch_for::<ServerListResponse>(scope, &base, &Endpoint::ServerList).await
            else {
                return;
            };
            if !latest.is_current(ticket) {
                return;
            }
            let (rows, link) = poll_outcome(result);
            servers.set(rows);
            status.set(link);
            refreshing.set(false);
        });
    };

    load();
    scope.set_interval(SERVER_POLL_MS, load);

    let server_count = move || servers.with(Vec::len);

    view! {
        <section class="server-browser" id="server-browser">
            <div class="section-head">
                <div>
                    <h2 class="section-title">{move || i18n.t("serverbrowser.title")}</h2>
                    <p class="muted">{move || i18n.t("serverbrowser.subtitle")}</p>
                </div>
                <div class="section-actions">
                    <span
                        class="badge status-pulse"
                        class:badge-online=move || status.get() == LinkStatus::Online
                        class:badge-warn=move || status.get() != LinkStatus::Online
                    >
                        {move || {
                            let status = status.get();
                            format!(
                                "{} {} {} · {}",
                                status.indicator(),
                                server_count(),
                                i18n.t("serverbrowser.servers"),
                                i18n.t(status.label_key()),
                            )
                        }}
                    </span>
                    <button
                        type="button"
                        class="btn btn-ghost btn-sm"
                        prop:disabled=move || refreshing.get()
                        on:click=move |_| load()
                    >
                        "⟳ "{move || i18n.t("common.refresh")}
                    </button>
                </div>
            </div>

            <div class="tabs" role="tablist">
                {ServerCategory::ALL
                    .into_iter()
                    .map(|category| {
                        let live = category.is_live();
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="tab"
                                class:active=live
                                prop:disabled=!live
                                title=move || if live { String::new() } else { i18n.t("common.soon") }
                            >
                                {format!("{} {}", category.icon(), category.label())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">
                        {format!("{} {}", ServerCategory::Surf.icon(), ServerCategory::Surf.label())}
                        " "{move || i18n.t("serverbrowser.title")}
                    </h3>
                    <span class="badge badge-secondary">
                        {move || format!("{} {}", server_count(), i18n.t("serverbrowser.available"))}
                    </span>
                </div>
                <Show
                    when=move || { server_count() > 0 }
                    fallback=|| view! { <EmptyState key="serverbrowser.noServers" icon="🛰️" /> }
                >
                    <ul class="server-rows">
                        {move || {
                            servers
                                .get()
                                .into_iter()
                                .map(|entry| view! { <ServerRow entry=entry /> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ServerRow(entry: ServerEntry) -> impl IntoView {
    let i18n = use_i18n();
    let online = entry.status == ServerStatus::Online;
    let ping = entry.ping_ms.map(|ms| format!("{ms} ms"));
    let players = entry.players_label();
    let name = entry.name.clone();
    let map = entry.map.clone();
    let region = entry.region.clone();

    view! {
        <li class="server-row">
            <span class="dot" class:dot-online=online class:dot-offline=!online />
            <div class="server-thumb">
                <MapPreview name=map.clone() />
            </div>
            <div class="server-info">
                <div class="server-name-line">
                    <span class="server-name">{name}</span>
                    <span class="badge badge-outline">{region}</span>
                </div>
                <span class="muted small">{map}</span>
            </div>
            <div class="server-meta">
                <span class="mono small">{players}" "{move || i18n.t("serverbrowser.players")}</span>
                {ping.map(|ping| view! { <span class="mono small muted">{ping}</span> })}
            </div>
            <button
                type="button"
                class="btn btn-primary btn-sm join-btn"
                on:click=move |_| open_connect_uri(&entry)
            >
                {move || i18n.t("common.join")}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_poll_clears_rows_and_disconnects() {
        let (rows, link) = poll_outcome(Err(FetchError::Status(502)));
        assert!(rows.is_empty());
        assert_eq!(link, LinkStatus::Disconnected);

        let (rows, link) = poll_outcome(Err(FetchError::Transport("offline".to_string())));
        assert!(rows.is_empty());
        assert_eq!(link, LinkStatus::Disconnected);
    }

    #[test]
    fn successful_poll_lists_reachable_servers() {
        let roster: ServerListResponse = serde_json::from_value(json!({
            "ts": 1,
            "servers": [
                { "ok": true, "host": "10.0.0.1", "port": 27015, "serverName": "Surf #1" },
                { "ok": false, "host": "10.0.0.2", "port": 27016, "error": "timed out" }
            ]
        }))
        .unwrap();
        let (rows, link) = poll_outcome(Ok(roster));
        assert_eq!(link, LinkStatus::Online);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].address, "10.0.0.1:27015");
    }
}
