//! Per-view lifetime handle for browser resources that must not outlive the view.
//!
//! JS handles are not `Send`, so they live in a thread-local table keyed by a
//! plain id; the `Copy` handle can then be captured by reactive closures and by
//! `on_cleanup`.

use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use gloo_timers::callback::{Interval, Timeout};
use surf_shared::RequestSeq;
use web_sys::{AbortController, AbortSignal};

#[derive(Default)]
struct ScopeResources {
    abort: Option<AbortController>,
    interval: Option<Interval>,
    timeout: Option<Timeout>,
}

thread_local! {
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(1) };
    static SCOPES: RefCell<HashMap<u64, ScopeResources>> = RefCell::new(HashMap::new());
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ViewScope {
    id: u64,
}

impl ViewScope {
    /// Open a scope tied to the current reactive owner. It closes when the
    /// owner is disposed.
    pub fn new() -> Self {
        let id = NEXT_SCOPE_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        SCOPES.with(|scopes| {
            scopes.borrow_mut().insert(id, ScopeResources::default());
        });
        let scope = Self { id };
        on_cleanup(move || scope.close());
        scope
    }

    pub fn is_alive(self) -> bool {
        SCOPES.with(|scopes| scopes.borrow().contains_key(&self.id))
    }

    /// Signal shared by every request issued from this scope. `None` once closed.
    pub fn abort_signal(self) -> Option<AbortSignal> {
        SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            let resources = scopes.get_mut(&self.id)?;
            if resources.abort.is_none() {
                resources.abort = AbortController::new().ok();
            }
            resources.abort.as_ref().map(AbortController::signal)
        })
    }

    /// Start a repeating timer, replacing any previous one.
    pub fn set_interval(self, millis: u32, callback: impl FnMut() + 'static) {
        if !self.is_alive() {
            return;
        }
        let interval = Interval::new(millis, callback);
        let previous = SCOPES.with(|scopes| {
            scopes
                .borrow_mut()
                .get_mut(&self.id)
                .and_then(|resources| resources.interval.replace(interval))
        });
        drop(previous);
    }

    /// Arm a one-shot timer, cancelling the pending one.
    pub fn set_timeout(self, millis: u32, callback: impl FnOnce() + 'static) {
        if !self.is_alive() {
            return;
        }
        let timeout = Timeout::new(millis, callback);
        let previous = SCOPES.with(|scopes| {
            scopes
                .borrow_mut()
                .get_mut(&self.id)
                .and_then(|resources| resources.timeout.replace(timeout))
        });
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    pub fn clear_timeout(self) {
        let previous = SCOPES.with(|scopes| {
            scopes
                .borrow_mut()
                .get_mut(&self.id)
                .and_then(|resources| resources.timeout.take())
        });
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    /// Abort in-flight requests and cancel timers. Idempotent.
    pub fn close(self) {
        let Some(resources) = SCOPES.with(|scopes| scopes.borrow_mut().remove(&self.id)) else {
            return;
        };
        if let Some(controller) = resources.abort {
            controller.abort();
        }
        if let Some(timeout) = resources.timeout {
            timeout.cancel();
        }
        drop(resources.interval);
    }
}

/// Latest-wins ticketing for one request stream of a view (a search box, a
/// selector-driven leaderboard). Results carrying an older ticket are dropped.
#[derive(Clone, Copy)]
pub(crate) struct LatestRequest(StoredValue<RequestSeq>);

impl LatestRequest {
    pub fn new() -> Self {
        Self(StoredValue::new(RequestSeq::default()))
    }

    pub fn begin(self) -> u64 {
        let mut ticket = 0;
        self.0.update_value(|seq| ticket = seq.begin());
        ticket
    }

    pub fn is_current(self, ticket: u64) -> bool {
        self.0
            .try_with_value(|seq| seq.is_current(ticket))
            .unwrap_or(false)
    }

    pub fn invalidate(self) {
        self.0.update_value(RequestSeq::invalidate);
    }
}
