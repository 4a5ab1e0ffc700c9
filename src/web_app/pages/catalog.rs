// web_app/pages/catalog.rs - Catalog page component
//
// Holds the single `CatalogController` in a signal and performs the I/O the
// controller asks for: every transition that returns a `ProductQuery` is
// sent through `ProductApi`, and the response is fed back into the
// controller, which may in turn ask for a replacement request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::web_app::api::{ProductApi, ProductQuery};
use crate::web_app::components::*;
use crate::web_app::config::CatalogConfig;
use crate::web_app::controller::{CatalogController, CatalogEvent};
use crate::web_app::error::CatalogError;
use crate::web_app::render::CardLocale;

/// Main catalog page component
///
/// On mount it reads `?vendor=`, requests the category list, and requests
/// the first page of products.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let vendor = use_query_map().with_untracked(|params| params.get("vendor"));

    let controller = RwSignal::new(CatalogController::new(vendor, CardLocale::from(&config)));

    let api: ApiHandle = StoredValue::new_local(ProductApi::new(&config).map_err(|err| {
        tracing::error!("Product API unavailable: {}", err);
        match err {
            CatalogError::InvalidBaseUrl { base, reason } => (base, reason),
            other => (config.api_base.clone(), other.to_string()),
        }
    }));

    match api.get_value() {
        Ok(client) => load_categories(controller, client),
        Err((base, reason)) => {
            controller.update(|c| c.receive_categories(Err(CatalogError::InvalidBaseUrl { base, reason })));
        }
    }
    if let Some(query) = controller.try_update(|c| c.fetch_products()).flatten() {
        send(controller, api, query);
    }

    let on_event = Callback::new(move |event: CatalogEvent| {
        if let Some(query) = controller.try_update(|c| c.dispatch(event)).flatten() {
            send(controller, api, query);
        }
    });
    let on_load_more = Callback::new(move |()| on_event.run(CatalogEvent::LoadMore));

    // Derived view state
    let cards = Memo::new(move |_| controller.with(|c| c.view().cards.clone()));
    let empty = Signal::derive(move || controller.with(|c| c.view().empty));
    let loading = Signal::derive(move || controller.with(|c| c.view().loading));
    let load_more = Signal::derive(move || controller.with(|c| c.view().load_more));
    let vendor_banner = Signal::derive(move || controller.with(|c| c.view().vendor_banner.clone()));
    let category_options = Signal::derive(move || controller.with(|c| c.category_options()));
    let status_options = Signal::derive(move || controller.with(|c| c.status_options()));

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 font-sans text-gray-900">
            <header class="bg-white dark:bg-gray-800 shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center">
                    <h1 class="text-xl font-bold text-primary">"Vegan Catalog"</h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col lg:flex-row gap-8 items-start">
                    // Filter sidebar
                    <aside class="w-full lg:w-64 flex-shrink-0 space-y-8">
                        <StatusPanel options=status_options on_event=on_event />
                        <CategoryPanel options=category_options on_event=on_event />
                    </aside>

                    // Results
                    <section class="flex-1 w-full min-w-0">
                        <VendorBanner vendor=vendor_banner />
                        <LoadingMessage state=loading />
                        <ProductGrid cards=cards empty=empty />
                        <LoadMoreButton control=load_more on_click=on_load_more />
                    </section>
                </div>
            </main>
        </div>
    }
}

/// The API client, or the base URL and reason it could not be built.
type ApiHandle = StoredValue<Result<ProductApi, (String, String)>, LocalStorage>;

/// Sends `query` and feeds the response back into the controller, following
/// up with a replacement request when the response turned out stale.
///
/// Without a client every query is answered with `InvalidBaseUrl` so the
/// controller never waits on a request that was not sent.
fn send(controller: RwSignal<CatalogController>, api: ApiHandle, query: ProductQuery) {
    match api.get_value() {
        Ok(client) => spawn_local(async move {
            let result = client.products(&query).await;
            let follow_up = controller.try_update(|c| c.receive(&query, result)).flatten();
            if let Some(next) = follow_up {
                send(controller, api, next);
            }
        }),
        Err((base, reason)) => {
            let error = CatalogError::InvalidBaseUrl { base, reason };
            let follow_up = controller.try_update(|c| c.receive(&query, Err(error))).flatten();
            if let Some(next) = follow_up {
                send(controller, api, next);
            }
        }
    }
}

fn load_categories(controller: RwSignal<CatalogController>, api: ProductApi) {
    spawn_local(async move {
        let result = api.categories().await;
        controller.try_update(|c| c.receive_categories(result));
    });
}
