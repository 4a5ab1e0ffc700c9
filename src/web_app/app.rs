// web_app/app.rs - Root application component
//
// Sets up meta tags, the client configuration context and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::CatalogConfig;
use crate::web_app::pages::CatalogPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(CatalogConfig::default());

    view! {
        <Title text="Vegan Catalog" />
        <Meta name="description" content="Browse products by category and vegan status" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=CatalogPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-primary text-white rounded-lg hover:bg-green-600 transition-colors"
                >
                    "Back to Catalog"
                </a>
            </div>
        </div>
    }
}
