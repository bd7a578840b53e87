use leptos::prelude::*;

use crate::avatars::AvatarStore;
use crate::config::{ApiBase, compiled_config, load_runtime_config};
use crate::home::HomePage;
use crate::i18n::{I18n, LanguageToggle, use_i18n};
use crate::leaderboards::LeaderboardsPage;
use crate::loading::LoadingScreen;
use crate::map_details::MapDetailsPage;
use crate::maps::MapsPage;
use crate::profile::ProfilePage;
use crate::router::{CurrentRoute, Link, Route, provide_router};

const REPOSITORY_URL: &str = "https://github.com/bnt0p/st-poor-webpanel";

/// Drop the static boot shell shipped in `index.html` once Leptos owns the page.
fn remove_boot_shell() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(shell) = document.get_element_by_id("app-boot-shell") {
        shell.remove();
    }
}

#[component]
pub fn App() -> impl IntoView {
    let i18n = I18n::provide();

    let api_base = RwSignal::new(compiled_config().api_base);
    let ready = RwSignal::new(false);
    provide_context(ApiBase(api_base));
    AvatarStore::provide(api_base);
    let current = provide_router();

    load_runtime_config(api_base, ready);
    remove_boot_shell();

    Effect::new(move || {
        let lang = i18n.language();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", lang.tag());
        }
    });

    view! {
        <div class="app-shell">
            <NavHeader current=current />
            <main class="app-main">
                <Show when=move || ready.get() fallback=|| view! { <LoadingScreen /> }>
                    <RouteOutlet current=current />
                </Show>
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn NavHeader(current: CurrentRoute) -> impl IntoView {
    let i18n = use_i18n();
    let CurrentRoute(route) = current;

    let nav_link = move |target: Route, key: &'static str| {
        let active_target = target.clone();
        view! {
            <span class="nav-item" class:active=move || route.with(|r| section_of(r) == section_of(&active_target))>
                <Link to=target class="nav-link">{move || i18n.t(key)}</Link>
            </span>
        }
    };

    view! {
        <header class="nav-header">
            <div class="container nav-inner">
                <Link to=Route::Home class="brand">
                    <span class="brand-icon">"🏄"</span>
                    <span class="brand-text">{move || i18n.t("hero.title")}</span>
                </Link>
                <nav class="nav-links">
                    {nav_link(Route::Home, "common.home")}
                    {nav_link(Route::Leaderboards, "common.leaderboards")}
                    {nav_link(Route::Maps, "common.maps")}
                </nav>
                <LanguageToggle />
            </div>
        </header>
    }
}

/// Top-level section a route belongs to, for highlighting the nav entry.
fn section_of(route: &Route) -> u8 {
    match route {
        Route::Home | Route::NotFound => 0,
        Route::Leaderboards | Route::Profile(_) => 1,
        Route::Maps | Route::MapDetails(_) => 2,
    }
}

#[component]
fn RouteOutlet(current: CurrentRoute) -> impl IntoView {
    let CurrentRoute(route) = current;
    move || match route.get() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Leaderboards => view! { <LeaderboardsPage /> }.into_any(),
        Route::Maps => view! { <MapsPage /> }.into_any(),
        Route::MapDetails(name) => view! { <MapDetailsPage map_name=name /> }.into_any(),
        Route::Profile(id) => view! { <ProfilePage steam_id=id /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="container page">
            <div class="card not-found">
                <h1 class="page-title">"404"</h1>
                <p class="muted">{move || i18n.t("common.notFound")}</p>
                <Link to=Route::Home class="btn btn-primary">
                    "← "{move || i18n.t("common.backToHome")}
                </Link>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <span class="muted">{move || i18n.t("footer.text")}</span>
                <a class="footer-link" href=REPOSITORY_URL target="_blank" rel="noopener noreferrer">
                    {move || i18n.t("footer.repo")}
                </a>
            </div>
        </footer>
    }
}
