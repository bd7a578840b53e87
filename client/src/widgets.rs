use leptos::prelude::*;
use wasm_bindgen::JsCast;

use surf_shared::catalog::{MAP_PLACEHOLDER, map_preview_url};
use surf_shared::{Mode, Style, Track};

use crate::i18n::{I18n, use_i18n};

/// Inline progress row for a panel whose data is in flight.
#[component]
pub fn Spinner(key: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="panel-state">
            <span class="spinner" aria-hidden="true" />
            <span class="status-pulse">{move || i18n.t(key)}</span>
        </div>
    }
}

/// Placeholder row for an empty or failed panel.
#[component]
pub fn EmptyState(key: &'static str, #[prop(optional)] icon: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="panel-state empty-state">
            {(!icon.is_empty()).then(|| view! { <span class="empty-icon">{icon}</span> })}
            <span>{move || i18n.t(key)}</span>
        </div>
    }
}

/// Map screenshot; swaps to the local placeholder once if the image is missing.
#[component]
pub fn MapPreview(#[prop(into)] name: String) -> impl IntoView {
    let src = map_preview_url(&name);
    view! {
        <img
            class="map-preview"
            src=src
            alt=name
            loading="lazy"
            on:error=|e| {
                if let Some(img) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
                    && !img.src().ends_with(MAP_PLACEHOLDER)
                {
                    img.set_src(MAP_PLACEHOLDER);
                }
            }
        />
    }
}

/// Text of an `<input>`/`<select>` event target.
pub(crate) fn input_value(e: &web_sys::Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web_sys::HtmlSelectElement>()
        .map(web_sys::HtmlSelectElement::value)
}

/// Localized track name: "Main" or "Bonus N".
pub(crate) fn track_label(i18n: I18n, track: Track) -> String {
    match track.bonus_number() {
        None => i18n.t("leaderboards.mainTrack"),
        Some(n) => format!("{} {n}", i18n.t("leaderboards.bonus")),
    }
}

/// `<option>` list for the track selector.
pub(crate) fn track_options(i18n: I18n) -> impl IntoView {
    Track::all()
        .map(move |track| {
            view! { <option value=track.value()>{move || track_label(i18n, track)}</option> }
        })
        .collect_view()
}

pub(crate) fn style_options() -> impl IntoView {
    Style::all()
        .map(|style| view! { <option value=style.value()>{style.name()}</option> })
        .collect_view()
}

pub(crate) fn mode_options() -> impl IntoView {
    Mode::ALL
        .into_iter()
        .map(|mode| view! { <option value=mode.label()>{mode.label()}</option> })
        .collect_view()
}
