use leptos::prelude::*;

use surf_shared::profile::position_badge;
use surf_shared::records::rank_for_mode;
use surf_shared::{Endpoint, LoadState, MapLeaderboard, Mode, RecordFilter, SurfRecord, Track};

use crate::avatars::{Avatar, use_avatars};
use crate::config::ApiBase;
use crate::http::spawn_load;
use crate::i18n::use_i18n;
use crate::router::{Link, Route};
use crate::scope::{LatestRequest, ViewScope};
use crate::time_format::format_date;
use crate::widgets::{EmptyState, MapPreview, Spinner, input_value, mode_options, track_options};

/// Rows kept after filtering a map's records down to one mode.
const MAP_DETAIL_ROWS: usize = 10;

/// Records for the main route or a bonus. Mode is not a server-side filter
/// here; rows are narrowed and renumbered locally.
fn track_endpoint(map_name: &str, track: Track) -> Endpoint {
    Endpoint::TopMap {
        map: map_name.to_string(),
        filter: RecordFilter {
            track,
            ..RecordFilter::default()
        },
        steam_id: None,
    }
}

#[component]
pub fn MapDetailsPage(map_name: String) -> impl IntoView {
    let i18n = use_i18n();
    let avatars = use_avatars();
    let ApiBase(api_base) = expect_context();
    let scope = ViewScope::new();
    let latest = LatestRequest::new();

    let track: RwSignal<Track> = RwSignal::new(Track::MAIN);
    let mode: RwSignal<Mode> = RwSignal::new(Mode::Standard);
    let records: RwSignal<LoadState<Vec<SurfRecord>>> = RwSignal::new(LoadState::Idle);

    let fetch_map = map_name.clone();
    Effect::new(move || {
        let endpoint = track_endpoint(&fetch_map, track.get());
        spawn_load(
            scope,
            latest,
            api_base.get_untracked(),
            endpoint,
            records,
            |resp: MapLeaderboard| resp.records,
        );
    });

    let ranked = Memo::new(move |_| {
        records.with(|state| rank_for_mode(state.items(), mode.get(), MAP_DETAIL_ROWS))
    });

    Effect::new(move || {
        ranked.with(|rows| avatars.request_all(rows.iter().map(|r| r.record.steam_id.as_str())));
    });

    let title = map_name.clone();

    view! {
        <div class="container page">
            <Link to=Route::Maps class="btn btn-ghost btn-sm back-link">
                "← "{move || i18n.t("common.maps")}
            </Link>

            <div class="map-hero card">
                <div class="map-hero-image">
                    <MapPreview name=map_name.clone() />
                </div>
                <div class="map-hero-text">
                    <h1 class="page-title">"🗺️ "{title}</h1>
                    <p class="muted">{move || i18n.t("mapDetails.title")}</p>
                </div>
            </div>

            <div class="card">
                <div class="filter-grid">
                    <div class="field">
                        <label class="field-label" for="detail-track">{move || i18n.t("mapDetails.selectTrack")}</label>
                        <select
                            id="detail-track"
                            class="select"
                            prop:value=move || track.get().value()
                            on:change=move |e| {
                                track.set(input_value(&e).and_then(|v| Track::parse(&v)).unwrap_or_default());
                            }
                        >
                            {track_options(i18n)}
                        </select>
                    </div>
                    <div class="field">
                        <label class="field-label" for="detail-mode">{move || i18n.t("mapDetails.selectMode")}</label>
                        <select
                            id="detail-mode"
                            class="select"
                            prop:value=move || mode.get().label()
                            on:change=move |e| {
                                mode.set(input_value(&e).and_then(|v| Mode::parse(&v)).unwrap_or_default());
                            }
                        >
                            {mode_options()}
                        </select>
                    </div>
                </div>

                {move || {
                    if records.with(|r| r.is_loading() || matches!(r, LoadState::Idle)) {
                        return view! { <Spinner key="common.loading" /> }.into_any();
                    }
                    let rows = ranked.get();
                    if rows.is_empty() {
                        return view! { <EmptyState key="mapDetails.noRecordsFound" icon="🏁" /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{move || i18n.t("mapDetails.position")}</th>
                                    <th>{move || i18n.t("mapDetails.player")}</th>
                                    <th>{move || i18n.t("mapDetails.time")}</th>
                                    <th>{move || i18n.t("mapDetails.date")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        let record = row.record;
                                        view! {
                                            <tr>
                                                <td class="position" class:podium=row.position <= 3>
                                                    {position_badge(Some(row.position as i64))}
                                                </td>
                                                <td>
                                                    <Link to=Route::Profile(record.steam_id.clone()) class="player-cell">
                                                        <Avatar steam_id=record.steam_id.clone() name=record.player_name.clone() />
                                                        <span>{record.player_name.clone()}</span>
                                                    </Link>
                                                </td>
                                                <td class="mono">{record.formatted_time.clone()}</td>
                                                <td class="muted">{format_date(record.unix_stamp)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
