use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Full-page splash shown until runtime configuration has been resolved.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let i18n = use_i18n();
    let steps: [(&'static str, &'static str); 3] = [
        ("common.connecting", "dot-primary"),
        ("loading.loadingStats", "dot-secondary"),
        ("loading.loadingSurf", "dot-primary"),
    ];

    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-logo">
                <span class="loading-emoji">"🏄"</span>
                <span class="loading-ring" />
            </div>
            <h2 class="gradient-text">{move || i18n.t("loading.title")}</h2>
            <p class="muted status-pulse">{move || i18n.t("loading.subtitle")}</p>
            <div class="loading-bar"><div class="loading-bar-fill" /></div>
            <ul class="loading-steps">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(i, (key, dot))| {
                        view! {
                            <li style=format!("animation-delay: {}ms;", i * 500)>
                                <span class=format!("dot {dot}") />
                                <span>{move || i18n.t(key)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
