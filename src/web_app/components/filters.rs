// web_app/components/filters.rs - Sidebar filter panels
//
// Both panels render buttons from `FilterOption`s computed by the controller,
// so the active highlight is a pure function of the current selector. Clicks
// dispatch a `CatalogEvent`; the panels hold no state of their own.

use leptos::prelude::*;

use crate::web_app::controller::{CatalogEvent, FilterOption};
use crate::web_app::model::VeganStatus;
use crate::web_app::render::filter_button_class;

/// One sidebar button
#[component]
pub fn FilterButton(
    label: String,
    active: bool,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=filter_button_class(active)
            on:click=move |_| on_click.run(())
        >
            {label}
        </button>
    }
}

/// Category panel: "All" plus one button per category
///
/// Empty when the categories request failed.
#[component]
pub fn CategoryPanel(
    #[prop(into)]
    options: Signal<Vec<FilterOption<String>>>,
    on_event: Callback<CatalogEvent>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h3 class="font-bold text-gray-900 dark:text-white text-sm uppercase tracking-wide">
                "Categories"
            </h3>
            <div class="space-y-1">
                {move || options.get().into_iter().map(|option| {
                    let FilterOption { label, value, active } = option;
                    let on_click = Callback::new(move |()| {
                        on_event.run(CatalogEvent::SelectCategory(value.clone()));
                    });
                    view! { <FilterButton label=label active=active on_click=on_click /> }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Vegan status panel: All / Vegan / Not Vegan / Unsure
#[component]
pub fn StatusPanel(
    #[prop(into)]
    options: Signal<Vec<FilterOption<VeganStatus>>>,
    on_event: Callback<CatalogEvent>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h3 class="font-bold text-gray-900 dark:text-white text-sm uppercase tracking-wide">
                "Vegan Status"
            </h3>
            <div class="space-y-1">
                {move || options.get().into_iter().map(|option| {
                    let FilterOption { label, value, active } = option;
                    let on_click = Callback::new(move |()| {
                        on_event.run(CatalogEvent::SelectStatus(value));
                    });
                    view! { <FilterButton label=label active=active on_click=on_click /> }
                }).collect_view()}
            </div>
        </div>
    }
}
