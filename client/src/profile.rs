use leptos::prelude::*;

use surf_shared::profile::position_badge;
use surf_shared::{
    Endpoint, LoadState, MapLeaderboard, Mode, ProfileRecord, ProfileSummary, RecordFilter, Style,
    Track,
};

use crate::avatars::Avatar;
use crate::config::ApiBase;
use crate::http::spawn_load;
use crate::i18n::use_i18n;
use crate::router::{Link, Route};
use crate::scope::{LatestRequest, ViewScope};
use crate::time_format::{format_count, format_date};
use crate::widgets::{
    EmptyState, Spinner, input_value, mode_options, style_options, track_options,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Recent,
    Top,
    MapSearch,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [ProfileTab::Recent, ProfileTab::Top, ProfileTab::MapSearch];

    fn label(self) -> (&'static str, &'static str) {
        match self {
            ProfileTab::Recent => ("🗺️", "profile.recentMaps"),
            ProfileTab::Top => ("🏆", "profile.topRecords"),
            ProfileTab::MapSearch => ("🔍", "profile.searchByMap"),
        }
    }
}

/// The player's own standing on one map under the chosen filters.
fn standing_endpoint(steam_id: &str, map: &str, filter: RecordFilter) -> Option<Endpoint> {
    let map = map.trim();
    if map.is_empty() {
        return None;
    }
    Some(Endpoint::TopMap {
        map: map.to_string(),
        filter,
        steam_id: Some(steam_id.to_string()),
    })
}

#[component]
pub fn ProfilePage(steam_id: String) -> impl IntoView {
    let ApiBase(api_base) = expect_context();
    let scope = ViewScope::new();
    let latest = LatestRequest::new();

    let profile: RwSignal<LoadState<ProfileSummary>> = RwSignal::new(LoadState::Idle);
    spawn_load(
        scope,
        latest,
        api_base.get_untracked(),
        Endpoint::Profile {
            steam_id: steam_id.clone(),
        },
        profile,
        |summary: ProfileSummary| summary,
    );

    move || match profile.get() {
        LoadState::Idle | LoadState::Loading => {
            view! { <div class="container page"><Spinner key="common.loading" /></div> }.into_any()
        }
        LoadState::Failed(_) => view! { <ProfileNotFound /> }.into_any(),
        LoadState::Ready(summary) => {
            let steam_id = steam_id.clone();
            view! { <ProfileView summary=summary steam_id=steam_id scope=scope /> }.into_any()
        }
    }
}

#[component]
fn ProfileNotFound() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="container page">
            <div class="card not-found">
                <span class="empty-icon">"🔍"</span>
                <h1 class="page-title">{move || i18n.t("profile.notFound")}</h1>
                <p class="muted">{move || i18n.t("profile.notFoundDesc")}</p>
                <Link to=Route::Leaderboards class="btn btn-primary">
                    "← "{move || i18n.t("leaderboards.backToLeaderboard")}
                </Link>
            </div>
        </div>
    }
}

#[component]
fn ProfileView(summary: ProfileSummary, steam_id: String, scope: ViewScope) -> impl IntoView {
    let i18n = use_i18n();
    let tab: RwSignal<ProfileTab> = RwSignal::new(ProfileTab::Recent);
    let query: RwSignal<String> = RwSignal::new(String::new());

    let name = summary.display_name().to_string();
    let record_count = summary.records_top.len() as i64;
    let summary = StoredValue::new(summary);

    let recent = Memo::new(move |_| query.with(|q| summary.with_value(|s| s.filtered_recent(q))));
    let top = Memo::new(move |_| query.with(|q| summary.with_value(|s| s.filtered_top(q))));

    view! {
        <div class="container page">
            <div class="card profile-header">
                <Avatar steam_id=steam_id.clone() name=name.clone() large=true />
                <div class="profile-text">
                    <div class="profile-title">
                        <h1 class="page-title">{name}</h1>
                        <span class="badge badge-primary">
                            {summary.with_value(|s| format!("#{}", s.rank))}
                        </span>
                    </div>
                    <div class="stat-grid">
                        <div class="stat">
                            <span class="muted">{move || i18n.t("profile.totalRuns")}</span>
                            <strong>{summary.with_value(|s| format_count(s.total_runs))}</strong>
                        </div>
                        <div class="stat">
                            <span class="muted">{move || i18n.t("profile.globalPoints")}</span>
                            <strong class="accent">{summary.with_value(|s| format_count(s.global_points))}</strong>
                        </div>
                        <div class="stat">
                            <span class="muted">{move || i18n.t("profile.records")}</span>
                            <strong>{format_count(record_count)}</strong>
                        </div>
                    </div>
                </div>
            </div>

            <div class="tabs">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|t| {
                        let (icon, key) = t.label();
                        view! {
                            <button
                                type="button"
                                class="tab"
                                class:active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {icon}" "{move || i18n.t(key)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || tab.get() != ProfileTab::MapSearch>
                <div class="card">
                    <input
                        class="input"
                        type="text"
                        placeholder=move || i18n.t("profile.filterPlaceholder")
                        prop:value=move || query.get()
                        on:input=move |e| {
                            if let Some(v) = input_value(&e) {
                                query.set(v);
                            }
                        }
                    />
                    {move || match tab.get() {
                        ProfileTab::Top => view! {
                            <RecordRows records=top.into() empty_key="profile.noRecords" />
                        }
                        .into_any(),
                        _ => view! {
                            <h2 class="card-title">{move || i18n.t("profile.recentMapPerformances")}</h2>
                            <RecordRows records=recent.into() empty_key="profile.noRecentMaps" />
                        }
                        .into_any(),
                    }}
                </div>
            </Show>

            <Show when=move || tab.get() == ProfileTab::MapSearch>
                <MapStanding steam_id=steam_id.clone() scope=scope />
            </Show>
        </div>
    }
}

#[component]
fn RecordRows(records: Signal<Vec<ProfileRecord>>, empty_key: &'static str) -> impl IntoView {
    move || {
        let rows = records.get();
        if rows.is_empty() {
            return view! { <EmptyState key=empty_key icon="🏁" /> }.into_any();
        }
        view! {
            <div class="rows">
                {rows
                    .into_iter()
                    .map(|record| {
                        let style = record
                            .style
                            .and_then(|s| u8::try_from(s).ok())
                            .map(|s| Style(s).name())
                            .unwrap_or_else(|| Style::NORMAL.name());
                        view! {
                            <div class="row">
                                <span class="position" class:podium=matches!(record.position, Some(1..=3))>
                                    {position_badge(record.position)}
                                </span>
                                <div class="row-main">
                                    <Link to=Route::MapDetails(record.map_name.clone()) class="row-title">
                                        {record.map_name.clone()}
                                    </Link>
                                    <span class="muted">
                                        {format!("{} • {} • {}", record.mode, style, format_date(record.last_finished))}
                                    </span>
                                </div>
                                <span class="mono accent">{record.formatted_time.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn MapStanding(steam_id: String, scope: ViewScope) -> impl IntoView {
    let i18n = use_i18n();
    let ApiBase(api_base) = expect_context();
    let latest = LatestRequest::new();

    let map_input: RwSignal<String> = RwSignal::new(String::new());
    let filter: RwSignal<RecordFilter> = RwSignal::new(RecordFilter::default());
    let result: RwSignal<LoadState<MapLeaderboard>> = RwSignal::new(LoadState::Idle);
    let steam_id = StoredValue::new(steam_id);

    let search = move || {
        let endpoint = steam_id.with_value(|id| {
            standing_endpoint(id, &map_input.get_untracked(), filter.get_untracked())
        });
        if let Some(endpoint) = endpoint {
            spawn_load(
                scope,
                latest,
                api_base.get_untracked(),
                endpoint,
                result,
                |board: MapLeaderboard| board,
            );
        }
    };

    let busy = move || result.with(LoadState::is_loading);

    view! {
        <div class="card">
            <h2 class="card-title">{move || i18n.t("profile.searchByMap")}</h2>
            <div class="filter-grid">
                <div class="field">
                    <label class="field-label" for="profile-map">{move || i18n.t("profile.mapName")}</label>
                    <input
                        id="profile-map"
                        class="input"
                        type="text"
                        placeholder="surf_beginner"
                        prop:value=move || map_input.get()
                        on:input=move |e| {
                            if let Some(v) = input_value(&e) {
                                map_input.set(v);
                            }
                        }
                        on:keydown=move |e: web_sys::KeyboardEvent| {
                            if e.key() == "Enter" {
                                search();
                            }
                        }
                    />
                </div>
                <div class="field">
                    <label class="field-label" for="profile-track">{move || i18n.t("profile.track")}</label>
                    <select
                        id="profile-track"
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
                    <label class="field-label" for="profile-mode">{move || i18n.t("profile.mode")}</label>
                    <select
                        id="profile-mode"
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
                <div class="field">
                    <label class="field-label" for="profile-style">{move || i18n.t("profile.style")}</label>
                    <select
                        id="profile-style"
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
                <div class="field field-action">
                    <button
                        type="button"
                        class="btn btn-primary"
                        prop:disabled=move || busy() || map_input.with(|m| m.trim().is_empty())
                        on:click=move |_| search()
                    >
                        {move || {
                            if busy() {
                                format!("⟳ {}", i18n.t("common.searching"))
                            } else {
                                format!("🔍 {}", i18n.t("common.searchRecords"))
                            }
                        }}
                    </button>
                </div>
            </div>

            {move || match result.get() {
                LoadState::Idle => view! { <EmptyState key="profile.searchPrompt" icon="🗺️" /> }.into_any(),
                LoadState::Loading => view! { <Spinner key="common.searching" /> }.into_any(),
                LoadState::Failed(_) => view! { <EmptyState key="common.error" /> }.into_any(),
                LoadState::Ready(board) => match board.player_standing() {
                    None => view! { <EmptyState key="profile.notRanked" icon="🏁" /> }.into_any(),
                    Some((position, best)) => {
                        let best = best.to_string();
                        view! {
                            <div class="standing">
                                <span class="position podium-lg">{position_badge(Some(position))}</span>
                                <div>
                                    <p class="standing-line">
                                        {move || i18n.t("profile.yourPosition")}": #"{position}
                                    </p>
                                    {(!best.is_empty()).then(|| view! {
                                        <p class="muted">
                                            {move || i18n.t("profile.bestTime")}": "{best}
                                        </p>
                                    })}
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                },
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standing_lookup_is_scoped_to_the_player() {
        let endpoint = standing_endpoint(
            "76561198000000001",
            "  surf_utopia ",
            RecordFilter {
                track: Track(1),
                style: Style::NORMAL,
                mode: Mode::Standard,
            },
        )
        .unwrap();
        assert_eq!(endpoint.segments(), vec!["surf", "top-map", "surf_utopia"]);
        assert_eq!(
            endpoint.query(),
            vec![
                ("bonus", "1".to_string()),
                ("steamid", "76561198000000001".to_string()),
            ]
        );
    }

    #[test]
    fn blank_map_issues_no_lookup() {
        assert!(standing_endpoint("1", "   ", RecordFilter::default()).is_none());
    }
}
