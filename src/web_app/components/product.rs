// web_app/components/product.rs - Product display components
//
// - ProductCard: one card in the grid, laid out from a `CardView`
// - ProductGrid: the card grid with its empty-state placeholder

use leptos::prelude::*;

use super::common::{EmptyState, StatusBadgeLabel};
use crate::web_app::config::{CatalogConfig, PLACEHOLDER_IMAGE};
use crate::web_app::controller::RenderedCard;
use crate::web_app::render::CardView;

/// Product card for the results grid
///
/// All text is precomputed in `card`; the only local state is the image
/// source, which falls back to the placeholder if the image fails to load.
#[component]
pub fn ProductCard(card: CardView) -> impl IntoView {
    let placeholder = use_context::<CatalogConfig>()
        .map(|config| config.placeholder_image)
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let image_src = RwSignal::new(card.image.clone());

    let CardView {
        name,
        description,
        price,
        link,
        category,
        vendor,
        badge,
        ..
    } = card;

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-md hover:shadow-xl transition-shadow duration-300 overflow-hidden flex flex-col h-full">
            <div class="relative h-48 overflow-hidden group">
                <img
                    src=move || image_src.get()
                    alt=name.clone()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    on:error=move |_| {
                        if image_src.get_untracked() != placeholder {
                            image_src.set(placeholder.clone());
                        }
                    }
                />
                <StatusBadgeLabel badge=badge />
            </div>

            <div class="p-5 flex-grow flex flex-col">
                <div class="flex justify-between items-start mb-2">
                    <span class="text-xs font-medium text-primary bg-green-50 px-2 py-1 rounded">
                        {category}
                    </span>
                    {vendor.map(|vendor| view! {
                        <span class="text-xs text-gray-400 font-mono">{vendor}</span>
                    })}
                </div>

                <h3 class="text-lg font-bold text-gray-800 dark:text-white mb-2 leading-tight line-clamp-2">
                    {name}
                </h3>

                <p class="text-sm text-gray-600 dark:text-gray-400 mb-4 flex-grow line-clamp-3">
                    {description}
                </p>

                <div class="mt-auto pt-4 border-t border-gray-100 dark:border-gray-700 flex items-center justify-between">
                    <span class="text-xl font-bold text-gray-900 dark:text-white">{price}</span>
                    <a
                        href=link
                        target="_blank"
                        class="flex items-center gap-1 text-sm font-medium text-white bg-primary hover:bg-green-600 px-4 py-2 rounded-lg transition-colors"
                    >
                        "View Product"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Results grid
///
/// Cards are keyed by `RenderedCard::key`, so appending a page only mounts
/// the new cards.
#[component]
pub fn ProductGrid(
    #[prop(into)]
    cards: Signal<Vec<RenderedCard>>,
    #[prop(into)]
    empty: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            <Show when=move || empty.get()>
                <EmptyState />
            </Show>
            <For
                each=move || cards.get()
                key=|rendered| rendered.key
                children=move |rendered| view! { <ProductCard card=rendered.card /> }
            />
        </div>
    }
}
