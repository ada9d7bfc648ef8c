// web_app/components/common.rs - Reusable UI components
//
// Small stateless components shared by the pages. All data arrives via
// props; none of them talk to the API.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-slate-200 border-t-blue-600"></div>
            <span class="mt-4 text-slate-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error panel with an optional retry action
#[component]
pub fn ErrorDisplay(
    /// Short heading
    #[prop(default = "Error Occurred")]
    title: &'static str,
    /// The error message to display
    error: String,
    /// Shows a "Try again" button when set
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div class="flex-1">
                <h3 class="text-red-800 font-bold mb-1">{title}</h3>
                <p class="text-red-600 text-sm">{error}</p>
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="mt-3 px-3 py-1.5 text-sm font-semibold rounded-lg bg-white border border-red-200 \
                               text-red-700 hover:bg-red-100 transition-colors"
                        on:click=move |_| retry.run(())
                    >
                        "Try again"
                    </button>
                })}
            </div>
        </div>
    }
}

/// Shown when a request succeeded but returned nothing
#[component]
pub fn EmptyState(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-slate-300">
            <h3 class="text-xl font-bold text-slate-900 mb-2">{title}</h3>
            <p class="text-slate-500 max-w-md mx-auto">{message}</p>
        </div>
    }
}

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-10">
            <h2 class="text-3xl font-bold text-slate-900">{title}</h2>
            {subtitle.map(|text| view! { <p class="text-slate-600 mt-2">{text}</p> })}
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "text-xs px-2 py-1 rounded bg-emerald-100 text-emerald-700",
        "red" => "text-xs px-2 py-1 rounded bg-rose-100 text-rose-700",
        "blue" => "text-xs px-2 py-1 rounded bg-blue-100 text-blue-700",
        _ => "text-xs px-2 py-1 rounded bg-slate-100 text-slate-700",
    }
}

/// Prev/Next controls with a "Showing page X of Y" line
///
/// The buttons are disabled from the flags rather than by asking the
/// server for an out-of-range page.
#[component]
pub fn Pagination(
    summary: Signal<String>,
    can_go_prev: Signal<bool>,
    can_go_next: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let button_class = "px-3 py-2 rounded border border-slate-300 bg-white hover:bg-slate-50 \
                        disabled:opacity-50 disabled:cursor-not-allowed transition-colors";

    view! {
        <div class="mt-8 flex items-center justify-between">
            <p class="text-sm text-slate-500">{move || summary.get()}</p>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class=button_class
                    disabled=move || !can_go_prev.get()
                    on:click=move |_| on_prev.run(())
                >
                    "Prev"
                </button>
                <button
                    type="button"
                    class=button_class
                    disabled=move || !can_go_next.get()
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

/// "MV" brand mark used in the header and footer
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <span class="inline-flex h-9 w-9 items-center justify-center rounded-md \
                     bg-gradient-to-tr from-blue-600 to-indigo-500 text-white font-bold">
            "MV"
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-emerald-100"));
        assert!(badge_class("red").contains("bg-rose-100"));
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("unknown").contains("bg-slate-100"));
    }

    #[test]
    fn test_badge_classes_share_shape() {
        for variant in ["green", "red", "blue", "gray"] {
            let class = badge_class(variant);
            assert!(class.starts_with("text-xs px-2 py-1 rounded"), "variant {}", variant);
        }
    }
}
