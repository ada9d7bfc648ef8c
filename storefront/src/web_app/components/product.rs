// web_app/components/product.rs - Product display components
//
// - ProductCard: grid card for one product
// - ProductGrid: keyed grid of cards

use leptos::prelude::*;

use super::common::Badge;
use crate::web_app::listing::keyed_rows;
use crate::web_app::model::{format_price, product_image_url, stock_label, Product};

/// Product card
///
/// Image (with placeholder fallback), title, description, price and a
/// stock badge.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image = product_image_url(&product).to_string();
    let price = format_price(product.price);
    let badge_variant = if product.in_stock { "green" } else { "red" };
    let badge_label = stock_label(product.in_stock);
    let title = product.title;
    let description = product.description;

    view! {
        <div class="group rounded-xl border border-slate-200/50 bg-white/70 p-4 shadow-sm \
                    hover:shadow-md transition-all">
            <div class="aspect-square w-full overflow-hidden rounded-lg bg-slate-100">
                <img
                    src=image
                    alt=title.clone()
                    class="h-full w-full object-cover group-hover:scale-105 transition-transform"
                />
            </div>
            <div class="mt-3">
                <h4 class="font-semibold text-slate-800 line-clamp-1">{title}</h4>
                <p class="text-sm text-slate-500 line-clamp-2">{description}</p>
                <div class="mt-2 flex items-center justify-between">
                    <span class="font-bold text-slate-900">{price}</span>
                    <Badge variant=badge_variant>{badge_label}</Badge>
                </div>
            </div>
        </div>
    }
}

/// Grid of product cards keyed by position and product id
#[component]
pub fn ProductGrid(
    #[prop(into)]
    items: Signal<Vec<Product>>,
    #[prop(default = "grid grid-cols-2 md:grid-cols-3 gap-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <For
                each=move || keyed_rows(items.get(), |product| product.id.as_str())
                key=|(key, _)| key.clone()
                children=move |(_, product)| view! { <ProductCard product=product /> }
            />
        </div>
    }
}
