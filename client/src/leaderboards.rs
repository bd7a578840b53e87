use leptos::prelude::*;

use surf_shared::debounce::SEARCH_DEBOUNCE_MS;
use surf_shared::profile::position_badge;
use surf_shared::{
    DebounceGate, Endpoint, ExternalLeaderboard, ExternalRecord, LatestResponse, LoadState,
    MapLeaderboard, Mode, PointsEntry, RecordFilter, SearchMatch, SearchResponse, StatsResponse,
    Style, SurfRecord, TopPointsResponse, Track,
};

use crate::avatars::{Avatar, use_avatars};
use crate::config::ApiBase;
use crate::http::spawn_load;
use crate::i18n::{I18n, use_i18n};
use crate::router::{Link, Route};
use crate::scope::{LatestRequest, ViewScope};
use crate::time_format::{format_count, format_datetime, format_run_time};
use crate::widgets::{
    EmptyState, Spinner, input_value, mode_options, style_options, track_label, track_options,
};

/// Rows shown for per-map and external rankings.
const MAP_BOARD_ROWS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Recent,
    MapBoard,
    GlobalMapRank,
    GlobalRanking,
}

impl Tab {
    const ALL: [Tab; 4] = [
        Tab::Recent,
        Tab::MapBoard,
        Tab::GlobalMapRank,
        Tab::GlobalRanking,
    ];

    fn icon(self) -> &'static str {
        match self {
            Tab::Recent => "📈",
            Tab::MapBoard => "🗺️",
            Tab::GlobalMapRank => "🌍",
            Tab::GlobalRanking => "🏆",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Tab::Recent => "leaderboards.recentRecords",
            Tab::MapBoard => "leaderboards.mapLeaderboards",
            Tab::GlobalMapRank => "leaderboards.globalMapRank",
            Tab::GlobalRanking => "leaderboards.globalRanking",
        }
    }
}

/// Parameters a map search was issued with, echoed above its results so a
/// later edit of the selectors does not relabel old rows.
#[derive(Clone, Debug, PartialEq)]
struct SearchEcho {
    map: String,
    filter: RecordFilter,
}

impl SearchEcho {
    fn capture(map: &str, filter: RecordFilter) -> Option<Self> {
        let map = map.trim();
        (!map.is_empty()).then(|| Self {
            map: map.to_string(),
            filter,
        })
    }

    fn map_board_endpoint(&self) -> Endpoint {
        Endpoint::TopMap {
            map: self.map.clone(),
            filter: self.filter,
            steam_id: None,
        }
    }

    fn external_endpoint(&self) -> Endpoint {
        Endpoint::TopExternal {
            map: self.map.clone(),
            track: self.filter.track,
            style: self.filter.style,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MapBoard {
    echo: SearchEcho,
    records: Vec<SurfRecord>,
}

#[derive(Clone, Debug, PartialEq)]
struct ExternalBoard {
    echo: SearchEcho,
    rows: Vec<ExternalRecord>,
}

fn keep_top(records: Vec<SurfRecord>) -> Vec<SurfRecord> {
    records.into_iter().take(MAP_BOARD_ROWS).collect()
}

fn keep_top_external(rows: Vec<ExternalRecord>) -> Vec<ExternalRecord> {
    rows.into_iter().take(MAP_BOARD_ROWS).collect()
}

#[component]
pub fn LeaderboardsPage() -> impl IntoView {
    let i18n = use_i18n();
    let avatars = use_avatars();
    let ApiBase(api_base) = expect_context();
    let scope = ViewScope::new();

    let stats: RwSignal<LoadState<StatsResponse>> = RwSignal::new(LoadState::Idle);
    let recent: RwSignal<LoadState<Vec<SurfRecord>>> = RwSignal::new(LoadState::Idle);
    let top_points: RwSignal<LoadState<Vec<PointsEntry>>> = RwSignal::new(LoadState::Idle);
    let active_tab: RwSignal<Tab> = RwSignal::new(Tab::Recent);

    let stats_req = LatestRequest::new();
    let recent_req = LatestRequest::new();
    let points_req = LatestRequest::new();

    let load_stats = move || {
        spawn_load(
            scope,
            stats_req,
            api_base.get_untracked(),
            Endpoint::Stats,
            stats,
            |resp: StatsResponse| resp,
        );
    };
    let load_recent = move || {
        spawn_load(
            scope,
            recent_req,
            api_base.get_untracked(),
            Endpoint::Latest,
            recent,
            move |resp: LatestResponse| {
                avatars.request_all(resp.records.iter().map(|r| r.steam_id.as_str()));
                resp.records
            },
        );
    };
    let load_points = move || {
        spawn_load(
            scope,
            points_req,
            api_base.get_untracked(),
            Endpoint::TopPoints,
            top_points,
            move |resp: TopPointsResponse| {
                avatars.request_all(resp.players.iter().map(|p| p.steam_id.as_str()));
                resp.players
            },
        );
    };

    load_stats();
    load_recent();
    load_points();

    view! {
        <div class="container page">
            <div class="page-header">
                <h1 class="page-title gradient-text">"🏆 "{move || i18n.t("leaderboards.title")}</h1>
                <p class="page-subtitle muted">{move || i18n.t("leaderboards.subtitle")}</p>
            </div>

            <div class="grid grid-2">
                <StatCard
                    label_key="leaderboards.totalPlayers"
                    value=Signal::derive(move || stats.with(|s| s.ready().map(|s| s.player_count)))
                    loading=Signal::derive(move || stats.with(|s| s.is_loading()))
                />
                <StatCard
                    label_key="leaderboards.totalRuns"
                    value=Signal::derive(move || stats.with(|s| s.ready().map(|s| s.total_runs)))
                    loading=Signal::derive(move || stats.with(|s| s.is_loading()))
                />
            </div>

            <PlayerSearch scope=scope />

            <div class="tabs" role="tablist">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="tab"
                                class:active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.icon()}" "{move || i18n.t(tab.label_key())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <MapSearchPanels scope=scope active_tab=active_tab />

            <Show when=move || active_tab.get() == Tab::Recent>
                <RecentRecords recent=recent on_refresh=Callback::new(move |_| load_recent()) />
            </Show>
            <Show when=move || active_tab.get() == Tab::GlobalRanking>
                <PointsRanking top_points=top_points on_refresh=Callback::new(move |_| load_points()) />
            </Show>
        </div>
    }
}

#[component]
fn StatCard(
    label_key: &'static str,
    value: Signal<Option<i64>>,
    loading: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="card stat-card">
            {move || {
                if loading.get() {
                    view! { <span class="skeleton stat-skeleton" /> }.into_any()
                } else {
                    view! {
                        <span class="stat-value">{format_count(value.get().unwrap_or_default())}</span>
                    }
                    .into_any()
                }
            }}
            <span class="stat-label muted">{move || i18n.t(label_key)}</span>
        </div>
    }
}

/// Debounced player lookup with a result dropdown linking to profiles.
#[component]
fn PlayerSearch(scope: ViewScope) -> impl IntoView {
    let i18n = use_i18n();
    let avatars = use_avatars();
    let ApiBase(api_base) = expect_context();

    let query: RwSignal<String> = RwSignal::new(String::new());
    let results: RwSignal<LoadState<Vec<SearchMatch>>> = RwSignal::new(LoadState::Idle);
    let gate: StoredValue<DebounceGate<String>> = StoredValue::new(DebounceGate::new());
    let search_req = LatestRequest::new();

    let run_search = move |q: String| {
        spawn_load(
            scope,
            search_req,
            api_base.get_untracked(),
            Endpoint::Search { query: q },
            results,
            move |resp: SearchResponse| {
                avatars.request_all(resp.matches.iter().map(|m| m.steam_id.as_str()));
                resp.matches
            },
        );
    };

    let on_input = move |e: leptos::ev::Event| {
        let Some(raw) = input_value(&e) else {
            return;
        };
        query.set(raw.clone());
        let trimmed = raw.trim().to_string();
        if trimmed.is_empty() {
            gate.update_value(DebounceGate::cancel);
            scope.clear_timeout();
            search_req.invalidate();
            results.set(LoadState::Idle);
            return;
        }
        let mut ticket = 0;
        gate.update_value(|g| ticket = g.submit(trimmed));
        scope.set_timeout(SEARCH_DEBOUNCE_MS, move || {
            let mut due = None;
            gate.update_value(|g| due = g.fire(ticket));
            if let Some(q) = due {
                run_search(q);
            }
        });
    };

    view! {
        <div class="card search-card">
            <label class="field-label" for="player-search">
                {move || format!("{}:", i18n.t("leaderboards.searchPlayers"))}
            </label>
            <div class="search-box">
                <input
                    id="player-search"
                    class="input"
                    type="search"
                    autocomplete="off"
                    placeholder=move || format!("{}...", i18n.t("leaderboards.searchPlayers"))
                    prop:value=move || query.get()
                    on:input=on_input
                />
                <span class="search-icon" class:spin=move || results.with(LoadState::is_loading)>
                    {move || if results.with(LoadState::is_loading) { "⟳" } else { "🔍" }}
                </span>
                {move || match results.get() {
                    LoadState::Idle | LoadState::Loading => None,
                    LoadState::Failed(_) => Some(
                        view! {
                            <div class="dropdown">
                                <EmptyState key="leaderboards.noPlayersFound" />
                            </div>
                        }
                        .into_any(),
                    ),
                    LoadState::Ready(matches) if matches.is_empty() => Some(
                        view! {
                            <div class="dropdown">
                                <EmptyState key="leaderboards.noPlayersFound" />
                            </div>
                        }
                        .into_any(),
                    ),
                    LoadState::Ready(matches) => Some(
                        view! {
                            <div class="dropdown">
                                {matches
                                    .into_iter()
                                    .map(|player| {
                                        let points = format_count(player.global_points);
                                        view! {
                                            <Link to=Route::Profile(player.steam_id.clone()) class="dropdown-row">
                                                <Avatar steam_id=player.steam_id.clone() name=player.player_name.clone() />
                                                <div class="row-main">
                                                    <span class="row-title">{player.player_name.clone()}</span>
                                                    <span class="muted small">
                                                        {points}" "{move || i18n.t("leaderboards.points")}
                                                    </span>
                                                </div>
                                            </Link>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                    ),
                }}
            </div>
        </div>
    }
}

/// Selector row shared by the per-map and external ranking tabs.
#[component]
fn MapSearchPanels(scope: ViewScope, active_tab: RwSignal<Tab>) -> impl IntoView {
    let i18n = use_i18n();
    let avatars = use_avatars();
    let ApiBase(api_base) = expect_context();

    let map_input: RwSignal<String> = RwSignal::new(String::new());
    let filter: RwSignal<RecordFilter> = RwSignal::new(RecordFilter::default());
    let map_board: RwSignal<LoadState<MapBoard>> = RwSignal::new(LoadState::Idle);
    let external: RwSignal<LoadState<ExternalBoard>> = RwSignal::new(LoadState::Idle);
    let board_req = LatestRequest::new();
    let external_req = LatestRequest::new();

    let search_map_board = move || {
        let Some(echo) = SearchEcho::capture(&map_input.get_untracked(), filter.get_untracked())
        else {
            return;
        };
        spawn_load(
            scope,
            board_req,
            api_base.get_untracked(),
            echo.map_board_endpoint(),
            map_board,
            move |resp: MapLeaderboard| {
                let records = keep_top(resp.records);
                avatars.request_all(records.iter().map(|r| r.steam_id.as_str()));
                MapBoard { echo, records }
            },
        );
    };

    let search_external = move || {
        let Some(echo) = SearchEcho::capture(&map_input.get_untracked(), filter.get_untracked())
        else {
            return;
        };
        spawn_load(
            scope,
            external_req,
            api_base.get_untracked(),
            echo.external_endpoint(),
            external,
            move |resp: ExternalLeaderboard| ExternalBoard {
                echo,
                rows: keep_top_external(resp.data),
            },
        );
    };

    let map_is_blank = move || map_input.with(|m| m.trim().is_empty());
    let visible = move || matches!(active_tab.get(), Tab::MapBoard | Tab::GlobalMapRank);

    view! {
        <Show when=visible>
            <div class="card">
                <div class="filter-grid">
                    <div class="field">
                        <label class="field-label" for="map-input">{move || i18n.t("leaderboards.selectMap")}</label>
                        <input
                            id="map-input"
                            class="input"
                            type="text"
                            placeholder="surf_beginner, surf_utopia..."
                            prop:value=move || map_input.get()
                            on:input=move |e| {
                                if let Some(v) = input_value(&e) {
                                    map_input.set(v);
                                }
                            }
                            on:keydown=move |e: web_sys::KeyboardEvent| {
                                if e.key() == "Enter" {
                                    match active_tab.get_untracked() {
                                        Tab::GlobalMapRank => search_external(),
                                        _ => search_map_board(),
                                    }
                                }
                            }
                        />
                    </div>
                    <div class="field">
                        <label class="field-label" for="track-select">{move || i18n.t("leaderboards.selectTrack")}</label>
                        <select
                            id="track-select"
                            class="select"
                            prop:value=move || filter.get().track.value()
                            on:change=move |e| {
                                let track = input_value(&e).and_then(|v| Track::parse(&v)).unwrap_or_default();
                                filter.update(|f| f.track = track);
                            }
                        >
                            {track_options(i18n)}
                        </select>
                    </div>
                    <div class="field">
                        <label class="field-label" for="style-select">{move || i18n.t("leaderboards.selectStyle")}</label>
                        <select
                            id="style-select"
                            class="select"
                            prop:value=move || filter.get().style.value()
                            on:change=move |e| {
                                let style = input_value(&e).and_then(|v| Style::parse(&v)).unwrap_or_default();
                                filter.update(|f| f.style = style);
                            }
                        >
                            {style_options()}
                        </select>
                    </div>
                    <div class="field">
                        <label class="field-label" for="mode-select">{move || i18n.t("leaderboards.selectMode")}</label>
                        <select
                            id="mode-select"
                            class="select"
                            prop:value=move || filter.get().mode.label()
                            on:change=move |e| {
                                let mode = input_value(&e).and_then(|v| Mode::parse(&v)).unwrap_or_default();
                                filter.update(|f| f.mode = mode);
                            }
                        >
                            {mode_options()}
                        </select>
                    </div>
                    <div class="field field-action">
                        <button
                            type="button"
                            class="btn btn-primary"
                            prop:disabled=move || {
                                map_is_blank()
                                    || match active_tab.get() {
                                        Tab::GlobalMapRank => external.with(LoadState::is_loading),
                                        _ => map_board.with(LoadState::is_loading),
                                    }
                            }
                            on:click=move |_| match active_tab.get_untracked() {
                                Tab::GlobalMapRank => search_external(),
                                _ => search_map_board(),
                            }
                        >
                            {move || {
                                let busy = match active_tab.get() {
                                    Tab::GlobalMapRank => external.with(LoadState::is_loading),
                                    _ => map_board.with(LoadState::is_loading),
                                };
                                if busy {
                                    format!("⟳ {}", i18n.t("common.searching"))
                                } else {
                                    format!("🔍 {}", i18n.t("common.searchRecords"))
                                }
                            }}
                        </button>
                    </div>
                </div>

                {move || match active_tab.get() {
                    Tab::GlobalMapRank => view! { <ExternalResults external=external /> }.into_any(),
                    _ => view! { <MapBoardResults map_board=map_board /> }.into_any(),
                }}
            </div>
        </Show>
    }
}

fn echo_badges(i18n: I18n, echo: &SearchEcho) -> impl IntoView + use<> {
    let map = echo.map.clone();
    let filter = echo.filter;
    view! {
        <div class="badge-row">
            <span class="badge badge-outline">{map}</span>
            <span class="badge badge-outline">{move || track_label(i18n, filter.track)}</span>
            <span class="badge badge-outline">
                {move || format!("{}: {}", i18n.t("leaderboards.style"), filter.style.name())}
            </span>
            <span class="badge badge-outline">{filter.mode.label()}</span>
        </div>
    }
}

#[component]
fn MapBoardResults(map_board: RwSignal<LoadState<MapBoard>>) -> impl IntoView {
    let i18n = use_i18n();
    move || match map_board.get() {
        LoadState::Idle => view! { <EmptyState key="leaderboards.searchPrompt" icon="🗺️" /> }.into_any(),
        LoadState::Loading => view! { <Spinner key="common.searching" /> }.into_any(),
        LoadState::Failed(_) => view! { <EmptyState key="leaderboards.noRecordsFound" /> }.into_any(),
        LoadState::Ready(board) if board.records.is_empty() => {
            view! { <EmptyState key="leaderboards.noRecordsFound" /> }.into_any()
        }
        LoadState::Ready(board) => view! {
            <div class="rows">
                {echo_badges(i18n, &board.echo)}
                {board
                    .records
                    .into_iter()
                    .enumerate()
                    .map(|(i, record)| {
                        let badge = position_badge(Some(i as i64 + 1));
                        let detail = format!(
                            "{} • {} • {}",
                            record.map_name,
                            record.mode,
                            Style(record.style.clamp(0, u8::MAX as i64) as u8).name(),
                        );
                        view! {
                            <Link to=Route::Profile(record.steam_id.clone()) class="row" >
                                <span class="position" class:podium=i < 3>{badge}</span>
                                <Avatar steam_id=record.steam_id.clone() name=record.player_name.clone() />
                                <div class="row-main">
                                    <span class="row-title">{record.player_name.clone()}</span>
                                    <span class="muted small">
                                        {move || i18n.t("leaderboards.completions")}": "{record.times_finished}
                                        " · "{detail}
                                    </span>
                                </div>
                                <span class="row-time mono">{record.formatted_time.clone()}</span>
                            </Link>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ExternalResults(external: RwSignal<LoadState<ExternalBoard>>) -> impl IntoView {
    let i18n = use_i18n();
    move || match external.get() {
        LoadState::Idle => view! { <EmptyState key="leaderboards.searchPrompt" icon="🌍" /> }.into_any(),
        LoadState::Loading => view! { <Spinner key="common.searching" /> }.into_any(),
        LoadState::Failed(_) => view! { <EmptyState key="leaderboards.noRecordsFound" /> }.into_any(),
        LoadState::Ready(board) if board.rows.is_empty() => {
            view! { <EmptyState key="leaderboards.noRecordsFound" /> }.into_any()
        }
        LoadState::Ready(board) => {
            let echo_line = format!(
                "{} • {} • {}",
                board.echo.map,
                board.echo.filter.mode.label(),
                board.echo.filter.style.name()
            );
            view! {
                <div class="rows">
                    {echo_badges(i18n, &board.echo)}
                    {board
                        .rows
                        .into_iter()
                        .enumerate()
                        .map(|(i, row)| {
                            let echo_line = echo_line.clone();
                            let replay = row.replay;
                            view! {
                                <div class="row">
                                    <span class="position" class:podium=i < 3>
                                        {position_badge(Some(i as i64 + 1))}
                                    </span>
                                    <div class="row-main">
                                        <span class="row-title">{row.player_name.clone()}</span>
                                        <span class="muted small">{echo_line}</span>
                                    </div>
                                    <span class="row-time mono">{format_run_time(row.time)}</span>
                                    <span class="muted small">
                                        {move || {
                                            if replay {
                                                format!("🎬 {}", i18n.t("leaderboards.hasReplay"))
                                            } else {
                                                i18n.t("leaderboards.noReplay")
                                            }
                                        }}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn RecentRecords(
    recent: RwSignal<LoadState<Vec<SurfRecord>>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"📈 "{move || i18n.t("leaderboards.recentRecords")}</h3>
                <button
                    type="button"
                    class="btn btn-ghost btn-sm"
                    prop:disabled=move || recent.with(LoadState::is_loading)
                    title=move || i18n.t("common.refresh")
                    on:click=move |_| on_refresh.run(())
                >
                    "⟳"
                </button>
            </div>
            {move || match recent.get() {
                LoadState::Idle | LoadState::Loading => view! { <Spinner key="common.loading" /> }.into_any(),
                LoadState::Failed(_) => view! { <EmptyState key="leaderboards.noRecentRecords" /> }.into_any(),
                LoadState::Ready(records) if records.is_empty() => {
                    view! { <EmptyState key="leaderboards.noRecentRecords" /> }.into_any()
                }
                LoadState::Ready(records) => view! {
                    <div class="rows">
                        {records
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <Link to=Route::Profile(record.steam_id.clone()) class="row">
                                        <Avatar steam_id=record.steam_id.clone() name=record.player_name.clone() />
                                        <div class="row-main">
                                            <span class="row-title">{record.player_name.clone()}</span>
                                            <span class="muted small">
                                                {format!("{} • {}", record.map_name, record.mode)}
                                            </span>
                                        </div>
                                        <div class="row-side">
                                            <span class="row-time mono">{record.formatted_time.clone()}</span>
                                            <span class="muted small">{format_datetime(record.unix_stamp)}</span>
                                        </div>
                                    </Link>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn PointsRanking(
    top_points: RwSignal<LoadState<Vec<PointsEntry>>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"🏆 "{move || i18n.t("leaderboards.globalRanking")}</h3>
                <button
                    type="button"
                    class="btn btn-ghost btn-sm"
                    prop:disabled=move || top_points.with(LoadState::is_loading)
                    title=move || i18n.t("common.refresh")
                    on:click=move |_| on_refresh.run(())
                >
                    "⟳"
                </button>
            </div>
            {move || match top_points.get() {
                LoadState::Idle | LoadState::Loading => view! { <Spinner key="common.loading" /> }.into_any(),
                LoadState::Failed(_) => view! { <EmptyState key="common.noData" /> }.into_any(),
                LoadState::Ready(players) if players.is_empty() => {
                    view! { <EmptyState key="common.noData" /> }.into_any()
                }
                LoadState::Ready(players) => view! {
                    <div class="rows">
                        {players
                            .into_iter()
                            .enumerate()
                            .map(|(i, player)| {
                                view! {
                                    <Link to=Route::Profile(player.steam_id.clone()) class="row">
                                        <span class="position" class:podium=i < 3>
                                            {position_badge(Some(i as i64 + 1))}
                                        </span>
                                        <Avatar steam_id=player.steam_id.clone() name=player.player_name.clone() />
                                        <div class="row-main">
                                            <span class="row-title">{player.player_name.clone()}</span>
                                        </div>
                                        <div class="row-side">
                                            <span class="stat-value-sm">{format_count(player.global_points)}</span>
                                            <span class="muted small">{move || i18n.t("leaderboards.points")}</span>
                                        </div>
                                    </Link>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_map_is_not_searchable() {
        assert_eq!(SearchEcho::capture("   ", RecordFilter::default()), None);
        let echo = SearchEcho::capture(" surf_utopia ", RecordFilter::default());
        assert_eq!(echo.map(|e| e.map), Some("surf_utopia".to_string()));
    }

    #[test]
    fn echo_builds_both_endpoints_from_the_same_selection() {
        let filter = RecordFilter {
            track: Track(2),
            style: Style(3),
            mode: Mode::Tick85,
        };
        let Some(echo) = SearchEcho::capture("surf_kitsune", filter) else {
            panic!("non-blank map must be captured");
        };

        let board = echo.map_board_endpoint();
        assert_eq!(board.segments(), vec!["surf", "top-map", "surf_kitsune"]);
        assert_eq!(
            board.query(),
            vec![
                ("bonus", "2".to_string()),
                ("style", "3".to_string()),
                ("mode", "85t".to_string()),
            ]
        );

        let external = echo.external_endpoint();
        assert_eq!(external.segments(), vec!["surf", "top-external", "surf_kitsune"]);
        assert_eq!(
            external.query(),
            vec![("bonus", "2".to_string()), ("style", "Only W".to_string())]
        );
    }

    #[test]
    fn boards_are_capped() {
        let rows: Vec<ExternalRecord> = (0..35)
            .map(|i| {
                serde_json::from_value(json!({ "player_name": format!("p{i}"), "time": i }))
                    .unwrap()
            })
            .collect();
        let kept = keep_top_external(rows);
        assert_eq!(kept.len(), MAP_BOARD_ROWS);
        assert_eq!(kept[0].player_name, "p0");
        assert_eq!(kept[19].player_name, "p19");
    }
}
