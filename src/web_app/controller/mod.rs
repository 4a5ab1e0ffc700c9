// web_app/controller/mod.rs - Catalog controller
//
// Owns the filter state and the page view model, and turns user events and
// API responses into state transitions. It never performs I/O: every
// transition that needs a request returns the `ProductQuery` to send, and the
// caller hands the response back through `receive`.
//
// At most one listing request is in flight. Each request is tagged with the
// query it was built from; a response whose query no longer matches the
// current filters is dropped and one replacement request is issued.

pub mod state;
pub mod view;

pub use state::{CatalogEvent, FilterState};
pub use view::*;

use crate::web_app::api::ProductQuery;
use crate::web_app::error::CatalogError;
use crate::web_app::model::{ProductPage, VeganStatus};
use crate::web_app::render::{render_card, CardLocale};

#[derive(Clone, Debug)]
pub struct CatalogController {
    state: FilterState,
    view: PageView,
    /// `None` until the categories request succeeds
    categories: Option<Vec<String>>,
    locale: CardLocale,
    next_card_key: u64,
}

impl CatalogController {
    pub fn new(vendor: Option<String>, locale: CardLocale) -> Self {
        Self {
            state: FilterState::new(vendor),
            view: PageView::default(),
            categories: None,
            locale,
            next_card_key: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    /// Starts a listing request for the current filters. Returns `None`
    /// without touching anything if a request is already in flight.
    pub fn fetch_products(&mut self) -> Option<ProductQuery> {
        let query = self.state.begin()?;

        if query.page == 1 {
            self.view.loading = LoadingIndicator::Loading;
            self.view.load_more.visible = false;
        } else {
            self.view.load_more.label = LOAD_MORE_BUSY_LABEL;
        }

        if let Some(vendor) = &query.vendor {
            self.view.vendor_banner = Some(vendor.clone());
        }

        tracing::info!(
            "Fetching products: page={}, vendor={:?}, category={:?}, status={:?}",
            query.page,
            query.vendor,
            query.category,
            query.status
        );
        Some(query)
    }

    /// Applies a user action. Returns the request to issue, if any.
    pub fn dispatch(&mut self, event: CatalogEvent) -> Option<ProductQuery> {
        match event {
            CatalogEvent::SelectCategory(category) => {
                self.state.select_category(category);
                self.view.clear_products();
                self.refresh()
            }
            CatalogEvent::SelectStatus(status) => {
                self.state.select_status(status);
                self.view.clear_products();
                self.refresh()
            }
            CatalogEvent::LoadMore => {
                if self.state.is_fetching() {
                    tracing::debug!("Load more ignored: a request is already in flight");
                    return None;
                }
                self.state.next_page();
                self.fetch_products()
            }
        }
    }

    /// After a filter change. If a request is outstanding its response will
    /// be stale, so only show the first-page loading state now; the
    /// replacement request goes out when that response arrives.
    fn refresh(&mut self) -> Option<ProductQuery> {
        if self.state.is_fetching() {
            self.view.loading = LoadingIndicator::Loading;
            self.view.load_more.visible = false;
            return None;
        }
        self.fetch_products()
    }

    /// Handles the response for `query`. Returns a follow-up request when the
    /// response was stale.
    pub fn receive(
        &mut self,
        query: &ProductQuery,
        result: Result<ProductPage, CatalogError>,
    ) -> Option<ProductQuery> {
        if !self.state.finish(query) {
            tracing::warn!("Ignoring response for a request that is not in flight: {:?}", query);
            return None;
        }

        if self.state.query() != *query {
            tracing::warn!(
                "Discarding stale response for page={} category={:?} status={:?}",
                query.page,
                query.category,
                query.status
            );
            return self.fetch_products();
        }

        match result {
            Ok(page) => self.apply_page(query, page),
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
                self.view.loading = LoadingIndicator::Failed;
            }
        }
        None
    }

    fn apply_page(&mut self, query: &ProductQuery, page: ProductPage) {
        self.view.loading = LoadingIndicator::Hidden;
        self.view.load_more.label = LOAD_MORE_LABEL;

        if query.page == 1 && page.results.is_empty() {
            tracing::info!("No products found");
            self.view.clear_products();
            self.view.empty = true;
            self.view.load_more.visible = false;
            return;
        }

        tracing::info!(
            "Received {} products (page {}, has_next={})",
            page.results.len(),
            query.page,
            page.has_next
        );

        self.view.empty = false;
        for product in &page.results {
            let key = self.next_card_key;
            self.next_card_key += 1;
            self.view.cards.push(RenderedCard {
                key,
                card: render_card(product, &self.locale),
            });
        }
        self.view.load_more.visible = page.has_next;
    }

    /// Fills the category panel. On failure the panel stays empty.
    pub fn receive_categories(&mut self, result: Result<Vec<String>, CatalogError>) {
        match result {
            Ok(categories) => {
                tracing::info!("Loaded {} categories", categories.len());
                self.categories = Some(categories);
            }
            Err(e) => {
                tracing::error!("Failed to load categories: {}", e);
            }
        }
    }

    /// Buttons for the category panel: "All" followed by each category, or
    /// nothing if categories never loaded.
    pub fn category_options(&self) -> Vec<FilterOption<String>> {
        let Some(categories) = &self.categories else {
            return Vec::new();
        };
        let selected = self.state.category();

        std::iter::once(FilterOption {
            label: ALL_LABEL.to_string(),
            value: None,
            active: selected.is_none(),
        })
        .chain(categories.iter().map(|category| FilterOption {
            label: category.clone(),
            value: Some(category.clone()),
            active: selected == Some(category.as_str()),
        }))
        .collect()
    }

    pub fn status_options(&self) -> Vec<FilterOption<VeganStatus>> {
        let selected = self.state.status();
        STATUS_OPTIONS
            .iter()
            .map(|(label, value)| FilterOption {
                label: (*label).to_string(),
                value: *value,
                active: selected == *value,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::Product;

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            ..Product::default()
        }
    }

    fn page(names: &[&str], has_next: bool) -> ProductPage {
        ProductPage {
            results: names.iter().map(|n| product(n)).collect(),
            has_next,
        }
    }

    #[test]
    fn test_first_fetch_shows_loading() {
        let mut controller = CatalogController::new(None, CardLocale::default());
        let query = controller.fetch_products().unwrap();

        assert_eq!(query, ProductQuery::default());
        assert_eq!(controller.view().loading, LoadingIndicator::Loading);
        assert!(!controller.view().load_more.visible);
    }

    #[test]
    fn test_card_keys_are_unique_across_pages() {
        let mut controller = CatalogController::new(None, CardLocale::default());
        let q1 = controller.fetch_products().unwrap();
        controller.receive(&q1, Ok(page(&["a", "b"], true)));
        let q2 = controller.dispatch(CatalogEvent::LoadMore).unwrap();
        controller.receive(&q2, Ok(page(&["c"], false)));

        let keys: Vec<u64> = controller.view().cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_response_is_ignored() {
        let mut controller = CatalogController::new(None, CardLocale::default());
        let bogus = ProductQuery {
            page: 4,
            ..ProductQuery::default()
        };
        assert!(controller.receive(&bogus, Ok(page(&["x"], true))).is_none());
        assert!(controller.view().cards.is_empty());
    }

    #[test]
    fn test_category_options_empty_until_loaded() {
        let controller = CatalogController::new(None, CardLocale::default());
        assert!(controller.category_options().is_empty());
    }

    #[test]
    fn test_status_options_default_to_all() {
        let controller = CatalogController::new(None, CardLocale::default());
        let options = controller.status_options();
        assert_eq!(options.len(), 4);
        assert!(options[0].active);
        assert!(options[1..].iter().all(|o| !o.active));
    }
}
