// web_app/components/common.rs - Reusable UI components
//
// Pure, stateless components that receive all data via props. Their text
// comes from the controller's view constants so the page and the tests agree.

use leptos::prelude::*;

use crate::web_app::controller::{
    vendor_banner_text, LoadMoreControl, LoadingIndicator, EMPTY_STATE_TEXT, LOAD_ERROR_TEXT,
    LOADING_TEXT,
};
use crate::web_app::render::StatusBadge;

/// Loading spinner component
///
/// Displays a centered spinner with a message below it.
#[component]
pub fn Loading(message: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-green-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-600 text-sm">{error}</p>
        </div>
    }
}

/// Loading indicator for the product list
///
/// Shows the spinner while a first page loads, and the error message once a
/// fetch has failed.
#[component]
pub fn LoadingMessage(
    #[prop(into)]
    state: Signal<LoadingIndicator>,
) -> impl IntoView {
    view! {
        {move || match state.get() {
            LoadingIndicator::Hidden => None,
            LoadingIndicator::Loading => Some(view! { <Loading message=LOADING_TEXT /> }.into_any()),
            LoadingIndicator::Failed => Some(view! { <ErrorDisplay error=LOAD_ERROR_TEXT /> }.into_any()),
        }}
    }
}

/// Vegan status badge shown over the product image
#[component]
pub fn StatusBadgeLabel(badge: StatusBadge) -> impl IntoView {
    let class = format!(
        "absolute top-3 right-3 px-3 py-1 text-xs font-bold rounded-full {}",
        badge.tone.class()
    );

    view! {
        <span class=class>{badge.label}</span>
    }
}

/// "Showing products from" banner, present only under a vendor constraint
#[component]
pub fn VendorBanner(
    #[prop(into)]
    vendor: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || vendor.get().map(|name| view! {
            <div class="mb-6 px-4 py-3 rounded-lg bg-green-50 text-green-800 border border-green-200 font-medium">
                {vendor_banner_text(&name)}
            </div>
        })}
    }
}

/// Placeholder shown when the first page has no products
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="col-span-full text-center py-12">
            <span class="material-icons text-6xl text-gray-300 mb-4">"search_off"</span>
            <p class="text-xl text-gray-500">{EMPTY_STATE_TEXT}</p>
        </div>
    }
}

/// "Load More" control and its wrapper
#[component]
pub fn LoadMoreButton(
    #[prop(into)]
    control: Signal<LoadMoreControl>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || control.get().visible>
            <div class="flex justify-center mt-10">
                <button
                    type="button"
                    class="px-6 py-3 bg-primary text-white rounded-lg hover:bg-green-600 transition-colors font-medium shadow-sm"
                    on:click=move |_| on_click.run(())
                >
                    {move || control.get().label}
                </button>
            </div>
        </Show>
    }
}
