// web_app/components/navbar.rs - Persistent header

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::common::BrandMark;
use crate::web_app::nav::{nav_link_class, NavItem, HOME_PATH, NAV_ITEMS};

/// Header link, highlighted when its path is the current one
#[component]
pub fn NavLink(item: NavItem) -> impl IntoView {
    let location = use_location();
    let class = move || nav_link_class(&location.pathname.get(), item.path);

    view! {
        <a href=item.path class=class>
            {item.label}
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-white/70 border-b border-slate-200/30">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <a href=HOME_PATH class="flex items-center gap-2">
                        <BrandMark />
                        <span class="font-semibold text-slate-800">"MultiVendor"</span>
                    </a>
                    <nav class="flex items-center gap-1">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| view! { <NavLink item=item /> })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
