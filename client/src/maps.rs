use leptos::prelude::*;

use surf_shared::maps::filter_maps;
use surf_shared::paging::MAPS_PER_PAGE;
use surf_shared::{Endpoint, LoadState, MapInfo, MapListResponse, Paginator};

use crate::config::ApiBase;
use crate::http::spawn_load;
use crate::i18n::use_i18n;
use crate::router::{Link, Route};
use crate::scope::{LatestRequest, ViewScope};
use crate::widgets::{EmptyState, MapPreview, input_value};

/// Searchable, paginated map catalog.
#[component]
pub fn MapsPage() -> impl IntoView {
    let i18n = use_i18n();
    let ApiBase(api_base) = expect_context();
    let scope = ViewScope::new();

    let catalog: RwSignal<LoadState<Vec<MapInfo>>> = RwSignal::new(LoadState::Idle);
    let search: RwSignal<String> = RwSignal::new(String::new());
    let pager: RwSignal<Paginator> = RwSignal::new(Paginator::new(MAPS_PER_PAGE));

    spawn_load(
        scope,
        LatestRequest::new(),
        api_base.get_untracked(),
        Endpoint::MapList,
        catalog,
        |resp: MapListResponse| resp.maps,
    );

    let filtered = Memo::new(move |_| catalog.with(|c| filter_maps(c.items(), &search.get())));
    let total = move || filtered.with(Vec::len);
    let page_items = move || filtered.with(|maps| pager.get().slice(maps).to_vec());

    let on_search = move |e: leptos::ev::Event| {
        let Some(term) = input_value(&e) else {
            return;
        };
        search.set(term);
        pager.update(Paginator::reset);
    };

    view! {
        <div class="container page">
            <div class="page-header">
                <h1 class="page-title">"🗺️ "{move || i18n.t("maps.title")}</h1>
                <p class="page-subtitle muted">{move || i18n.t("maps.subtitle")}</p>
            </div>

            <input
                class="input input-narrow"
                type="search"
                placeholder=move || i18n.t("maps.searchMaps")
                prop:value=move || search.get()
                on:input=on_search
            />

            {move || match catalog.with(|c| (c.is_loading() || matches!(c, LoadState::Idle), c.is_failed())) {
                (true, _) => view! {
                    <div class="grid grid-4">
                        {(0..MAPS_PER_PAGE)
                            .map(|_| view! { <div class="card map-card skeleton-card"><span class="skeleton" /></div> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                (_, true) => view! { <EmptyState key="common.error" icon="⚠️" /> }.into_any(),
                _ if total() == 0 => view! { <EmptyState key="maps.noMapsFound" icon="🗺️" /> }.into_any(),
                _ => view! {
                    <div class="grid grid-4">
                        {page_items()
                            .into_iter()
                            .map(|map| view! { <MapCard map=map /> })
                            .collect_view()}
                    </div>
                    <Show when=move || { pager.get().total_pages(total()) > 1 }>
                        <nav class="pagination">
                            <button
                                type="button"
                                class="btn btn-outline"
                                prop:disabled=move || !pager.get().has_previous()
                                on:click=move |_| pager.update(Paginator::previous)
                            >
                                "‹ "{move || i18n.t("common.previous")}
                            </button>
                            <span class="muted small">
                                {move || {
                                    format!(
                                        "{} {} {} {}",
                                        i18n.t("common.page"),
                                        pager.get().current(),
                                        i18n.t("common.of"),
                                        pager.get().total_pages(total()),
                                    )
                                }}
                            </span>
                            <span class="muted xsmall">
                                {move || format!("({} {})", total(), i18n.t("common.total"))}
                            </span>
                            <button
                                type="button"
                                class="btn btn-outline"
                                prop:disabled=move || !pager.get().has_next(total())
                                on:click=move |_| {
                                    let len = total();
                                    pager.update(|p| p.next(len));
                                }
                            >
                                {move || i18n.t("common.next")}" ›"
                            </button>
                        </nav>
                    </Show>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn MapCard(map: MapInfo) -> impl IntoView {
    let i18n = use_i18n();
    let bonus = map.bonus;
    let tier = map.tier.clone();

    view! {
        <div class="card map-card">
            <div class="map-thumb">
                <MapPreview name=map.name.clone() />
                <div class="map-thumb-shade" />
            </div>
            <h3 class="card-title small">"🗺️ "{map.name.clone()}</h3>
            <div class="badge-row">
                <span class="badge badge-secondary">
                    {move || format!("{}: {}", i18n.t("maps.tier"), tier)}
                </span>
                {(!map.style.is_empty()).then(|| view! { <span class="badge badge-outline">{map.style.clone()}</span> })}
                {(bonus > 0)
                    .then(|| {
                        view! {
                            <span class="badge badge-outline badge-green">
                                {move || format!("{} {}", bonus, i18n.t("maps.bonuses"))}
                            </span>
                        }
                    })}
            </div>
            <Link to=Route::MapDetails(map.name.clone()) class="btn btn-primary btn-block">
                {move || i18n.t("maps.viewRecords")}
            </Link>
        </div>
    }
}
