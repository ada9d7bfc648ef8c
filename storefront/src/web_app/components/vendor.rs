// web_app/components/vendor.rs - Vendor display components

use leptos::prelude::*;

use super::common::Badge;
use crate::web_app::listing::keyed_rows;
use crate::web_app::model::{vendor_bio, vendor_location, vendor_logo_url, Vendor};

/// Vendor card
///
/// Logo (initials avatar when missing), name, location ("Worldwide" when
/// missing), verified badge and bio. The directory also lists categories.
#[component]
pub fn VendorCard(
    vendor: Vendor,
    #[prop(default = false)]
    show_categories: bool,
) -> impl IntoView {
    let logo = vendor_logo_url(&vendor).into_owned();
    let location = vendor_location(&vendor).to_string();
    let bio = vendor_bio(&vendor).map(str::to_string);
    let categories = vendor.categories.clone().filter(|_| show_categories);
    let verified = vendor.verified;
    let name = vendor.name;

    view! {
        <div class="rounded-xl border border-slate-200/60 bg-white/70 p-5 shadow-sm">
            <div class="flex items-center gap-3">
                <img src=logo alt=name.clone() class="h-12 w-12 rounded-full" />
                <div class="flex-1">
                    <h4 class="font-semibold text-slate-800">{name}</h4>
                    <p class="text-xs text-slate-500">{location}</p>
                </div>
                {verified.then(|| view! { <Badge variant="blue">"Verified"</Badge> })}
            </div>
            {bio.map(|bio| view! { <p class="text-sm text-slate-600 mt-3 line-clamp-2">{bio}</p> })}
            {categories.map(|categories| view! {
                <div class="mt-3 flex flex-wrap gap-2">
                    {categories
                        .into_iter()
                        .map(|category| view! {
                            <span class="text-xs px-2 py-1 rounded bg-slate-100">{category}</span>
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

/// Grid of vendor cards keyed by position and vendor id
#[component]
pub fn VendorGrid(
    #[prop(into)]
    items: Signal<Vec<Vendor>>,
    #[prop(default = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5")]
    class: &'static str,
    #[prop(default = false)]
    show_categories: bool,
) -> impl IntoView {
    view! {
        <div class=class>
            <For
                each=move || keyed_rows(items.get(), |vendor| vendor.id.as_str())
                key=|(key, _)| key.clone()
                children=move |(_, vendor)| view! {
                    <VendorCard vendor=vendor show_categories=show_categories />
                }
            />
        </div>
    }
}
