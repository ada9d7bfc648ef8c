// web_app/pages/home.rs - Landing page
//
// Two independent, unpaginated fetches (trending products and featured
// vendors) fill disjoint sections; the rest is static marketing copy.

use chrono::Datelike;
use leptos::prelude::*;

use crate::web_app::api::ApiClient;
use crate::web_app::components::*;
use crate::web_app::listing::{top_n_query, HOME_PRODUCT_LIMIT, HOME_VENDOR_LIMIT};
use crate::web_app::nav::PRODUCTS_PATH;

/// (title, blurb) pairs for the "Why choose us" grid
pub const SELLING_POINTS: [(&str, &str); 4] = [
    ("Verified vendors", "Each seller is vetted for quality"),
    ("Buyer protection", "Secure checkout and refunds"),
    ("Fast shipping", "Reliable logistics partners"),
    ("24/7 support", "We\u{2019}re here whenever you need us"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let products = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_products(&top_n_query(HOME_PRODUCT_LIMIT)).await }
        }
    });

    let vendors = LocalResource::new(move || {
        let client = client.clone();
        async move { client.list_vendors(&top_n_query(HOME_VENDOR_LIMIT)).await }
    });

    view! {
        <main>
            <Hero />

            <section class="py-14 bg-slate-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionTitle title="Trending products" subtitle="Handpicked items from our community" />
                    {move || match products.get() {
                        None => view! { <Loading message="Loading products..." /> }.into_any(),
                        Some(Err(e)) => view! {
                            <ErrorDisplay title=e.title() error=e.to_string() />
                        }.into_any(),
                        Some(Ok(page)) => view! {
                            <ProductGrid
                                items=page.items
                                class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-5"
                            />
                        }.into_any(),
                    }}
                </div>
            </section>

            <section class="py-14">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionTitle
                        title="Featured vendors"
                        subtitle="All vendors are verified for quality and reliability"
                    />
                    {move || match vendors.get() {
                        None => view! { <Loading message="Loading vendors..." /> }.into_any(),
                        Some(Err(e)) => view! {
                            <ErrorDisplay title=e.title() error=e.to_string() />
                        }.into_any(),
                        Some(Ok(page)) => view! { <VendorGrid items=page.items /> }.into_any(),
                    }}
                </div>
            </section>

            <BecomeVendor />
            <WhyChooseUs />
            <Newsletter />
            <Footer />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden bg-gradient-to-br from-indigo-600 to-blue-600 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 relative">
                <div class="max-w-2xl">
                    <h1 class="text-4xl sm:text-5xl font-bold leading-tight">
                        "The marketplace where great products meet great vendors"
                    </h1>
                    <p class="mt-4 text-blue-100">
                        "Discover trending items across categories from verified sellers. \
                         Join as a vendor and reach customers worldwide."
                    </p>
                    <div class="mt-6 flex gap-3">
                        <a
                            href=PRODUCTS_PATH
                            class="px-5 py-3 bg-white text-blue-700 rounded-lg font-semibold hover:bg-blue-50"
                        >
                            "Shop products"
                        </a>
                        <a
                            href="#become-vendor"
                            class="px-5 py-3 border border-white/70 rounded-lg font-semibold hover:bg-white/10"
                        >
                            "Become a vendor"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BecomeVendor() -> impl IntoView {
    view! {
        <section id="become-vendor" class="py-16 bg-gradient-to-br from-blue-50 to-indigo-50">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h3 class="text-3xl font-bold text-slate-900">"Open your storefront in minutes"</h3>
                <p class="mt-3 text-slate-600">
                    "Start selling to a global audience with zero upfront costs. \
                     We handle the heavy lifting so you can focus on your products."
                </p>
                <a
                    href="#newsletter"
                    class="inline-block mt-6 px-6 py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700"
                >
                    "Get started"
                </a>
            </div>
        </section>
    }
}

#[component]
fn WhyChooseUs() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Why choose us" />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SELLING_POINTS
                        .into_iter()
                        .map(|(title, blurb)| view! {
                            <div class="rounded-xl border border-slate-200/60 p-5 bg-white/70">
                                <h4 class="font-semibold text-slate-800">{title}</h4>
                                <p class="text-sm text-slate-600 mt-1">{blurb}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Newsletter sign-up; acknowledged locally, nothing is sent anywhere
#[component]
fn Newsletter() -> impl IntoView {
    let subscribed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        subscribed.set(true);
    };

    view! {
        <section id="newsletter" class="py-16 bg-slate-50">
            <div class="max-w-md mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h3 class="text-2xl font-bold text-slate-900">"Join our newsletter"</h3>
                <p class="text-slate-600 mt-2">"Get product drops, vendor stories, and exclusive deals."</p>
                <Show
                    when=move || subscribed.get()
                    fallback=move || view! {
                        <form
                            on:submit=on_submit
                            class="mt-6 flex rounded-lg overflow-hidden border border-slate-200"
                        >
                            <input
                                type="email"
                                required=true
                                placeholder="you@example.com"
                                class="flex-1 px-4 py-3 outline-none"
                            />
                            <button type="submit" class="px-5 bg-blue-600 text-white font-semibold">
                                "Subscribe"
                            </button>
                        </form>
                    }
                >
                    <p class="mt-6 text-emerald-700 font-semibold">"Thanks for subscribing!"</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="py-10 border-t border-slate-200/60">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4">
                    <div class="flex items-center gap-3">
                        <BrandMark />
                        <span class="font-semibold">"MultiVendor"</span>
                    </div>
                    <p class="text-sm text-slate-500">
                        {format!("\u{00a9} {} MultiVendor. All rights reserved.", year)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
