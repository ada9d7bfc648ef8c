// web_app/pages/vendors.rs - Paginated vendor directory

use leptos::prelude::*;

use super::list_state::{list_bindings, use_list_query};
use crate::web_app::api::ApiClient;
use crate::web_app::components::*;
use crate::web_app::listing::{ListStatus, VendorFilters, VendorListQuery, VerifiedFilter, VENDOR_PAGE_SIZE};

pub fn directory_title(verified: VerifiedFilter) -> &'static str {
    match verified {
        VerifiedFilter::VerifiedOnly => "Verified vendors",
        VerifiedFilter::Any => "All vendors",
    }
}

#[component]
pub fn VendorsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let state = use_list_query(VendorListQuery::new(VENDOR_PAGE_SIZE), move |query| {
        let client = client.clone();
        async move { client.list_vendors(&query).await }
    });
    let list = list_bindings(state, "vendors");

    let verified = Signal::derive(move || state.with(|s| s.filters().verified));
    let status = Memo::new(move |_| state.with(|s| s.status()));
    let on_retry = list.on_retry;
    let items = list.items;

    let toggle_verified = move |ev: leptos::ev::Event| {
        let verified = if event_target_checked(&ev) {
            VerifiedFilter::VerifiedOnly
        } else {
            VerifiedFilter::Any
        };
        state.update(|s| {
            s.set_filters(VendorFilters { verified });
        });
    };

    view! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-6">
                <h1 class="text-3xl font-bold text-slate-900">{move || directory_title(verified.get())}</h1>
                <label class="flex items-center gap-2 text-sm text-slate-700 cursor-pointer">
                    <input
                        type="checkbox"
                        class="h-4 w-4 rounded border-slate-300 text-blue-600"
                        prop:checked=move || verified.get() == VerifiedFilter::VerifiedOnly
                        on:change=toggle_verified
                    />
                    "Verified only"
                </label>
            </div>

            {move || match status.get() {
                ListStatus::Loading => view! { <Loading message="Loading vendors..." /> }.into_any(),
                ListStatus::Failed(e) => view! {
                    <ErrorDisplay title=e.title() error=e.to_string() on_retry=on_retry />
                }.into_any(),
                ListStatus::Empty => view! {
                    <EmptyState
                        title="No vendors found"
                        message="Check back soon as new sellers join the marketplace."
                    />
                }.into_any(),
                ListStatus::Ready => view! {
                    <VendorGrid
                        items=items
                        class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-5"
                        show_categories=true
                    />
                }.into_any(),
            }}

            <Pagination
                summary=list.summary
                can_go_prev=list.can_go_prev
                can_go_next=list.can_go_next
                on_prev=list.on_prev
                on_next=list.on_next
            />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_title_follows_filter() {
        assert_eq!(directory_title(VerifiedFilter::default()), "Verified vendors");
        assert_eq!(directory_title(VerifiedFilter::Any), "All vendors");
    }
}
