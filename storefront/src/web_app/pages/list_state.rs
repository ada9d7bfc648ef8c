// web_app/pages/list_state.rs - Reactive wrapper around ListQuery
//
// Holds a `ListQuery` in a signal and keeps the displayed list in step
// with it: whenever the query string or the retry counter changes, a
// request is started with a fresh ticket and its response is applied
// only if no newer request has been started since.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::ApiError;
use crate::web_app::listing::{ListFilters, ListQuery};
use crate::web_app::model::Paginated;

/// Drive `fetch` from `initial` for the lifetime of the calling component.
///
/// Effects only run in the browser, so the server renders the initial
/// (loading) state and the first request goes out after hydration.
pub fn use_list_query<F, T, Fut>(
    initial: ListQuery<F, T>,
    fetch: impl Fn(String) -> Fut + 'static,
) -> RwSignal<ListQuery<F, T>>
where
    F: ListFilters + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Paginated<T>, ApiError>> + 'static,
{
    let state = RwSignal::new(initial);
    let request = Memo::new(move |_| state.with(|s| s.request_key()));

    Effect::new(move || {
        // Track the request key only; the writes below must not retrigger us
        let key = request.get();
        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        tracing::debug!("Fetching '{}' (attempt {})", key.query, key.attempt);

        let response = fetch(ticket.query.clone());
        spawn_local(async move {
            let result = response.await;
            // The page may have been left while the request was in flight
            let _ = state.try_update(|s| s.apply(&ticket, result));
        });
    });

    state
}

/// Derived views of a list state that the page templates bind to.
pub struct ListBindings<T: Send + Sync + 'static> {
    pub items: Signal<Vec<T>>,
    pub summary: Signal<String>,
    pub can_go_prev: Signal<bool>,
    pub can_go_next: Signal<bool>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_retry: Callback<()>,
}

pub fn list_bindings<F, T>(state: RwSignal<ListQuery<F, T>>, noun: &'static str) -> ListBindings<T>
where
    F: ListFilters + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    ListBindings {
        items: Signal::derive(move || state.with(|s| s.items().to_vec())),
        summary: Signal::derive(move || state.with(|s| s.summary(noun))),
        can_go_prev: Signal::derive(move || state.with(|s| s.can_go_prev())),
        can_go_next: Signal::derive(move || state.with(|s| s.can_go_next())),
        on_prev: Callback::new(move |()| {
            state.update(|s| {
                s.prev_page();
            })
        }),
        on_next: Callback::new(move |()| {
            state.update(|s| {
                s.next_page();
            })
        }),
        on_retry: Callback::new(move |()| state.update(|s| s.retry())),
    }
}
