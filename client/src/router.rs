//! Path-based routing over the History API.

use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Leaderboards,
    Maps,
    MapDetails(String),
    Profile(String),
    NotFound,
}

impl Route {
    /// Resolve a location path. `decode` undoes URI component encoding of
    /// the map name / player id segment.
    pub fn parse(path: &str, decode: impl Fn(&str) -> String) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["leaderboards"] => Route::Leaderboards,
            ["maps"] => Route::Maps,
            ["maps", name] => Route::MapDetails(decode(name)),
            ["profile", id] => Route::Profile(decode(id)),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self, encode: impl Fn(&str) -> String) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::Leaderboards => "/leaderboards".to_string(),
            Route::Maps => "/maps".to_string(),
            Route::MapDetails(name) => format!("/maps/{}", encode(name)),
            Route::Profile(id) => format!("/profile/{}", encode(id)),
        }
    }
}

fn encode_segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

fn decode_segment(raw: &str) -> String {
    js_sys::decode_uri_component(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}

pub(crate) fn route_href(route: &Route) -> String {
    route.href(encode_segment)
}

fn location_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::parse(&path, decode_segment)
}

#[derive(Clone, Copy)]
pub(crate) struct CurrentRoute(pub RwSignal<Route>);

struct PopstateBinding {
    window: web_sys::Window,
    _handler: wasm_bindgen::closure::Closure<dyn Fn(web_sys::PopStateEvent)>,
}

thread_local! {
    static POPSTATE_BINDING: RefCell<Option<PopstateBinding>> = const { RefCell::new(None) };
}

fn unbind_popstate() {
    POPSTATE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old
                .window
                .remove_event_listener_with_callback("popstate", old._handler.as_ref().unchecked_ref());
        }
    });
}

/// Provide the current route and follow back/forward navigation.
pub(crate) fn provide_router() -> CurrentRoute {
    let route = RwSignal::new(location_route());
    let current = CurrentRoute(route);
    provide_context(current);

    Effect::new(move || {
        use wasm_bindgen::prelude::*;

        let Some(window) = web_sys::window() else {
            return;
        };
        unbind_popstate();

        let handler = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_| {
            route.set(location_route());
        });
        if window
            .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            POPSTATE_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(PopstateBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
        on_cleanup(unbind_popstate);
    });

    current
}

/// Push `target` onto the session history and render it.
pub(crate) fn navigate(current: CurrentRoute, target: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let href = route_href(&target);
    if let Ok(history) = window.history()
        && let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href))
    {
        web_sys::console::warn_1(&e);
    }
    current.0.set(target);
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

/// In-app anchor. Plain clicks navigate without a page load; modified clicks
/// (new tab, new window) fall through to the browser.
#[component]
pub fn Link(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let current: CurrentRoute = expect_context();
    let href = route_href(&to);
    let on_click = move |e: web_sys::MouseEvent| {
        if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        e.prevent_default();
        navigate(current, to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        s.to_string()
    }

    fn percent(s: &str) -> String {
        s.replace(' ', "%20")
    }

    fn unpercent(s: &str) -> String {
        s.replace("%20", " ")
    }

    #[test]
    fn parses_top_level_pages() {
        assert_eq!(Route::parse("/", plain), Route::Home);
        assert_eq!(Route::parse("", plain), Route::Home);
        assert_eq!(Route::parse("/leaderboards", plain), Route::Leaderboards);
        assert_eq!(Route::parse("/leaderboards/", plain), Route::Leaderboards);
        assert_eq!(Route::parse("/maps", plain), Route::Maps);
    }

    #[test]
    fn parses_parameterized_pages() {
        assert_eq!(
            Route::parse("/maps/surf_utopia", plain),
            Route::MapDetails("surf_utopia".into())
        );
        assert_eq!(
            Route::parse("/profile/76561198000000001", plain),
            Route::Profile("76561198000000001".into())
        );
        assert_eq!(
            Route::parse("/maps/surf%20kitsune", unpercent),
            Route::MapDetails("surf kitsune".into())
        );
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(Route::parse("/maps?page=2", plain), Route::Maps);
        assert_eq!(Route::parse("/leaderboards#top", plain), Route::Leaderboards);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/admin", plain), Route::NotFound);
        assert_eq!(Route::parse("/maps/a/b", plain), Route::NotFound);
        assert_eq!(Route::parse("/profile", plain), Route::NotFound);
    }

    #[test]
    fn href_round_trips_through_parse() {
        let routes = [
            Route::Home,
            Route::Leaderboards,
            Route::Maps,
            Route::MapDetails("surf kitsune".into()),
            Route::Profile("7656".into()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.href(percent), unpercent), route);
        }
    }
}
