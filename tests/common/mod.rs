// tests/common/mod.rs - Shared fixtures for integration tests
//
// Builds products and pages the way the API returns them, plus a small
// driver that records every request the controller asks for.

#![allow(dead_code)]

use vegan_catalog::web_app::api::ProductQuery;
use vegan_catalog::web_app::controller::{CatalogController, CatalogEvent};
use vegan_catalog::web_app::error::CatalogError;
use vegan_catalog::web_app::model::{Product, ProductPage};
use vegan_catalog::web_app::render::CardLocale;

pub fn product(name: &str) -> Product {
    Product {
        name: name.to_string(),
        ..Product::default()
    }
}

pub fn page(names: &[&str], has_next: bool) -> ProductPage {
    ProductPage {
        results: names.iter().map(|name| product(name)).collect(),
        has_next,
    }
}

pub fn failure() -> CatalogError {
    CatalogError::UnexpectedStatus {
        status: 500,
        url: "https://api.example.com/api/products/?page=1".to_string(),
    }
}

/// Wraps a controller and keeps a log of issued requests, standing in for
/// the page's async plumbing.
pub struct Harness {
    pub controller: CatalogController,
    pub issued: Vec<ProductQuery>,
}

impl Harness {
    /// Equivalent of page load: builds the controller and issues page 1.
    pub fn start(vendor: Option<&str>) -> Self {
        let controller = CatalogController::new(vendor.map(str::to_string), CardLocale::default());
        let mut harness = Self {
            controller,
            issued: Vec::new(),
        };
        let first = harness.controller.fetch_products();
        harness.record(first);
        harness
    }

    pub fn dispatch(&mut self, event: CatalogEvent) -> Option<ProductQuery> {
        let next = self.controller.dispatch(event);
        self.record(next.clone());
        next
    }

    /// Answers `query` and records any follow-up request.
    pub fn respond(
        &mut self,
        query: &ProductQuery,
        result: Result<ProductPage, CatalogError>,
    ) -> Option<ProductQuery> {
        let next = self.controller.receive(query, result);
        self.record(next.clone());
        next
    }

    pub fn last_issued(&self) -> &ProductQuery {
        self.issued.last().expect("no request issued")
    }

    pub fn card_names(&self) -> Vec<String> {
        self.controller
            .view()
            .cards
            .iter()
            .map(|rendered| rendered.card.name.clone())
            .collect()
    }

    fn record(&mut self, query: Option<ProductQuery>) {
        if let Some(query) = query {
            self.issued.push(query);
        }
    }
}
