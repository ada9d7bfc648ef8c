// web_app/components/filters.rs - Product filter sidebar
//
// Every widget is a controlled input: it renders from the current
// `ProductFilters` and emits a whole new set through `on_change`.
// Page handling (back to page 1) is the list state's job, not ours.

use leptos::prelude::*;

use crate::web_app::listing::{keyed_rows, ProductFilters, StockFilter};

const CARD_CLASS: &str = "rounded-xl border border-slate-200/60 p-4 bg-white/70";
const INPUT_CLASS: &str = "w-full px-3 py-2 rounded border border-slate-200 \
                           focus:ring-2 focus:ring-blue-500 outline-none";

/// Free-text search box
#[component]
pub fn SearchInput(
    filters: Signal<ProductFilters>,
    on_change: Callback<ProductFilters>,
) -> impl IntoView {
    view! {
        <div class=CARD_CLASS>
            <h3 class="font-semibold mb-3">"Search"</h3>
            <input
                type="text"
                placeholder="Search products..."
                class=INPUT_CLASS
                prop:value=move || filters.with(|f| f.q.clone())
                on:input=move |ev| {
                    let mut next = filters.get_untracked();
                    next.q = event_target_value(&ev);
                    on_change.run(next);
                }
            />
        </div>
    }
}

/// Category dropdown; the empty value means "All"
#[component]
pub fn CategorySelect(
    filters: Signal<ProductFilters>,
    categories: Signal<Vec<String>>,
    on_change: Callback<ProductFilters>,
) -> impl IntoView {
    view! {
        <div class=CARD_CLASS>
            <h3 class="font-semibold mb-3">"Category"</h3>
            <select
                class=INPUT_CLASS
                prop:value=move || filters.with(|f| f.category.clone())
                on:change=move |ev| {
                    let mut next = filters.get_untracked();
                    next.category = event_target_value(&ev);
                    on_change.run(next);
                }
            >
                <option value="" selected=move || filters.with(|f| f.category.is_empty())>
                    "All"
                </option>
                <For
                    each=move || keyed_rows(categories.get(), |category| category.as_str())
                    key=|(key, _)| key.clone()
                    children=move |(_, category)| {
                        let current = category.clone();
                        let label = category.clone();
                        view! {
                            <option
                                value=category
                                selected=move || filters.with(|f| f.category == current)
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Any / In stock / Out of stock radios
#[component]
pub fn AvailabilityFilter(
    filters: Signal<ProductFilters>,
    on_change: Callback<ProductFilters>,
) -> impl IntoView {
    view! {
        <div class=CARD_CLASS>
            <h3 class="font-semibold mb-3">"Availability"</h3>
            <div class="flex flex-wrap items-center gap-2">
                {StockFilter::ALL.into_iter().map(|option| view! {
                    <label class="flex items-center gap-2 text-sm cursor-pointer">
                        <input
                            type="radio"
                            name="stock"
                            prop:checked=move || filters.with(|f| f.in_stock == option)
                            on:change=move |_| {
                                let mut next = filters.get_untracked();
                                next.in_stock = option;
                                on_change.run(next);
                            }
                        />
                        {option.label()}
                    </label>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Min/max price inputs plus the reset action
#[component]
pub fn PriceRangeFilter(
    filters: Signal<ProductFilters>,
    on_change: Callback<ProductFilters>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=CARD_CLASS>
            <h3 class="font-semibold mb-3">"Price"</h3>
            <div class="flex items-center gap-2">
                <input
                    type="number"
                    min="0"
                    placeholder="Min"
                    class=INPUT_CLASS
                    prop:value=move || filters.with(|f| f.min_price.clone())
                    on:input=move |ev| {
                        let mut next = filters.get_untracked();
                        next.min_price = event_target_value(&ev);
                        on_change.run(next);
                    }
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Max"
                    class=INPUT_CLASS
                    prop:value=move || filters.with(|f| f.max_price.clone())
                    on:input=move |ev| {
                        let mut next = filters.get_untracked();
                        next.max_price = event_target_value(&ev);
                        on_change.run(next);
                    }
                />
            </div>
            <button
                type="button"
                class="mt-3 text-sm text-blue-600 hover:underline"
                on:click=move |_| on_reset.run(())
            >
                "Reset filters"
            </button>
        </div>
    }
}

/// Complete filter sidebar for the products page
#[component]
pub fn FilterPanel(
    filters: Signal<ProductFilters>,
    categories: Signal<Vec<String>>,
    on_change: Callback<ProductFilters>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class="lg:col-span-1 space-y-5">
            <SearchInput filters=filters on_change=on_change />
            <CategorySelect filters=filters categories=categories on_change=on_change />
            <AvailabilityFilter filters=filters on_change=on_change />
            <PriceRangeFilter filters=filters on_change=on_change on_reset=on_reset />
        </aside>
    }
}
