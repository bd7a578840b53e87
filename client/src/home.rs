use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::router::{Link, Route};
use crate::server_list::ServerList;

const FEATURES: [(&str, &str, &str); 5] = [
    ("🏆", "index.competitiveTitle", "index.realTimeDesc"),
    ("🚀", "index.performanceTitle", "index.performanceDesc"),
    ("👥", "index.communityTitle", "index.communityDesc"),
    ("📊", "index.statsTitle", "index.comprehensiveDesc"),
    ("🗺️", "index.mapsTitle", "index.mapsDesc"),
];

fn scroll_to_server_browser() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(target) = document.get_element_by_id("server-browser") else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="hero">
            <div class="hero-glow" />
            <div class="hero-content">
                <h1 class="hero-title gradient-text">{move || i18n.t("hero.title")}</h1>
                <h2 class="hero-subtitle">{move || i18n.t("hero.subtitle")}</h2>
                <p class="hero-description muted">{move || i18n.t("hero.description")}</p>
                <div class="hero-actions">
                    <Link to=Route::Leaderboards class="btn btn-primary btn-lg">
                        "🏆 "{move || i18n.t("hero.viewLeaderboards")}
                    </Link>
                    <button
                        type="button"
                        class="btn btn-outline btn-lg"
                        on:click=move |_| scroll_to_server_browser()
                    >
                        "🖥️ "{move || i18n.t("hero.browseServers")}" ↓"
                    </button>
                </div>
            </div>
        </section>

        <div class="container">
            <div class="section-intro">
                <h2 class="section-title">{move || i18n.t("index.sectionTitle")}</h2>
                <p class="muted">{move || i18n.t("index.sectionDesc")}</p>
            </div>
            <ServerList />

            <div class="section-intro">
                <h2 class="section-title">{move || i18n.t("index.featuresTitle")}</h2>
                <p class="muted">{move || i18n.t("index.featuresDesc")}</p>
            </div>
            <div class="grid grid-3">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, desc)| {
                        view! {
                            <div class="card feature-card">
                                <h3 class="card-title">{icon}" "{move || i18n.t(title)}</h3>
                                <p class="muted">{move || i18n.t(desc)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="cta card">
                <h2 class="section-title">{move || i18n.t("index.ctaTitle")}</h2>
                <p class="muted">{move || i18n.t("index.ctaDesc")}</p>
                <Link to=Route::Leaderboards class="btn btn-primary btn-lg">
                    "🏆 "{move || i18n.t("index.viewLeaderboards")}
                </Link>
            </div>
        </div>
    }
}
