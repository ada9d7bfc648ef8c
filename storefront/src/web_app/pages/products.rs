// web_app/pages/products.rs - Filterable, paginated product listing

use leptos::prelude::*;

use super::list_state::{list_bindings, use_list_query};
use crate::web_app::api::ApiClient;
use crate::web_app::components::*;
use crate::web_app::listing::{ListStatus, ProductFilters, ProductListQuery, PRODUCT_PAGE_SIZE};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    // Loaded once; a failure just leaves the dropdown with "All"
    let categories = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_categories().await }
        }
    });
    let category_options = Signal::derive(move || {
        categories
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    let state = use_list_query(ProductListQuery::new(PRODUCT_PAGE_SIZE), move |query| {
        let client = client.clone();
        async move { client.list_products(&query).await }
    });
    let list = list_bindings(state, "items");

    let filters = Signal::derive(move || state.with(|s| s.filters().clone()));
    let status = Memo::new(move |_| state.with(|s| s.status()));

    let on_change = Callback::new(move |next: ProductFilters| {
        state.update(|s| {
            s.set_filters(next);
        })
    });
    let on_reset = Callback::new(move |()| state.update(|s| s.reset()));
    let on_retry = list.on_retry;
    let items = list.items;

    view! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-slate-900 mb-6">"Browse products"</h1>
            <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                <FilterPanel
                    filters=filters
                    categories=category_options
                    on_change=on_change
                    on_reset=on_reset
                />

                <section class="lg:col-span-3">
                    {move || match status.get() {
                        ListStatus::Loading => view! { <Loading message="Loading products..." /> }.into_any(),
                        ListStatus::Failed(e) => view! {
                            <ErrorDisplay title=e.title() error=e.to_string() on_retry=on_retry />
                        }.into_any(),
                        ListStatus::Empty => view! {
                            <EmptyState
                                title="No products found"
                                message="Try adjusting your filters or search terms."
                            />
                        }.into_any(),
                        ListStatus::Ready => view! { <ProductGrid items=items /> }.into_any(),
                    }}

                    <Pagination
                        summary=list.summary
                        can_go_prev=list.can_go_prev
                        can_go_next=list.can_go_next
                        on_prev=list.on_prev
                        on_next=list.on_next
                    />
                </section>
            </div>
        </main>
    }
}
