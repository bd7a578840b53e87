use leptos::prelude::*;
use wasm_bindgen::JsCast;

use surf_shared::avatar::default_avatar;
use surf_shared::records::initials;
use surf_shared::{AvatarCache, AvatarResponse, Endpoint};

use crate::http::{endpoint_url, fetch_json};

/// Session-wide avatar cache. Lookups outlive the view that requested them,
/// so they are not tied to a view scope.
#[derive(Clone, Copy)]
pub(crate) struct AvatarStore {
    cache: RwSignal<AvatarCache>,
    api_base: RwSignal<String>,
}

impl AvatarStore {
    pub fn provide(api_base: RwSignal<String>) -> Self {
        let store = Self {
            cache: RwSignal::new(AvatarCache::new()),
            api_base,
        };
        provide_context(store);
        store
    }

    /// Start a lookup for `steam_id` unless one was already issued this session.
    pub fn request(self, steam_id: &str) {
        // A pending slot renders like a missing one, so claiming notifies nobody.
        let mut claimed = false;
        self.cache
            .update_untracked(|cache| claimed = cache.claim(steam_id));
        if !claimed {
            return;
        }

        let steam_id = steam_id.to_string();
        let url = endpoint_url(
            &self.api_base.get_untracked(),
            &Endpoint::Avatar {
                steam_id: steam_id.clone(),
            },
        );
        let cache = self.cache;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_json::<AvatarResponse>(&url, None).await {
                Ok(resp) => cache.update(|c| c.resolve(&steam_id, &resp.avatar_url)),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("avatar lookup for {steam_id} failed: {e}").into(),
                    );
                    cache.update(|c| c.fail(&steam_id));
                }
            }
        });
    }

    pub fn request_all<'a>(self, ids: impl IntoIterator<Item = &'a str>) {
        for id in surf_shared::records::distinct_ids(ids) {
            self.request(&id);
        }
    }

    /// Resolved URL for one player, or `None` while the lookup is pending.
    /// Subscribers are only notified when this player's slot changes.
    pub fn url(self, steam_id: String) -> Memo<Option<String>> {
        let cache = self.cache;
        Memo::new(move |_| cache.with(|cache| cache.get(&steam_id).map(str::to_string)))
    }
}

pub(crate) fn use_avatars() -> AvatarStore {
    expect_context()
}

/// Round player avatar with an initials placeholder while the lookup is pending.
#[component]
pub fn Avatar(
    #[prop(into)] steam_id: String,
    #[prop(into)] name: String,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let avatars = use_avatars();
    avatars.request(&steam_id);

    let url = avatars.url(steam_id.clone());
    let fallback_text = initials(&name);
    let size_class = if large { "avatar avatar-lg" } else { "avatar" };

    view! {
        <span class=size_class>
            {move || match url.get() {
                Some(url) => {
                    let fallback = default_avatar(&steam_id);
                    view! {
                        <img
                            src=url
                            alt=name.clone()
                            loading="lazy"
                            on:error=move |e| {
                                if let Some(img) = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
                                    && img.src() != fallback
                                {
                                    img.set_src(fallback);
                                }
                            }
                        />
                    }
                    .into_any()
                }
                None => view! { <span class="avatar-initials">{fallback_text.clone()}</span> }
                    .into_any(),
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn store() -> AvatarStore {
        AvatarStore {
            cache: RwSignal::new(AvatarCache::new()),
            api_base: RwSignal::new(String::new()),
        }
    }

    #[test]
    fn other_players_resolving_does_not_touch_this_avatar() {
        let store = store();
        let url = store.url("1".to_string());
        let renders = Arc::new(AtomicUsize::new(0));
        let rendered = Memo::new({
            let renders = Arc::clone(&renders);
            move |_| {
                renders.fetch_add(1, Ordering::SeqCst);
                url.get()
            }
        });

        assert_eq!(rendered.get_untracked(), None);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        store.cache.update(|c| {
            c.claim("2");
            c.resolve("2", "https://cdn.test/2.jpg");
        });
        assert_eq!(rendered.get_untracked(), None);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        store.cache.update(|c| {
            c.claim("1");
            c.resolve("1", "https://cdn.test/1.jpg");
        });
        assert_eq!(rendered.get_untracked().as_deref(), Some("https://cdn.test/1.jpg"));
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }
}
