// web_app/controller/state.rs - Filter and pagination state
//
// One `FilterState` exists per page load. Fields are private so the only way
// to change them is through the transitions below: the vendor is fixed at
// construction and the page counter moves only via reset or `next_page`.

use crate::web_app::api::ProductQuery;
use crate::web_app::model::VeganStatus;

/// User actions dispatched into the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEvent {
    /// `None` is the "All" button
    SelectCategory(Option<String>),
    SelectStatus(Option<VeganStatus>),
    LoadMore,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    category: Option<String>,
    status: Option<VeganStatus>,
    vendor: Option<String>,
    page: u32,
    in_flight: Option<ProductQuery>,
}

impl FilterState {
    /// An empty vendor (`?vendor=`) counts as no vendor.
    pub fn new(vendor: Option<String>) -> Self {
        Self {
            category: None,
            status: None,
            vendor: vendor.filter(|v| !v.is_empty()),
            page: 1,
            in_flight: None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn status(&self) -> Option<VeganStatus> {
        self.status
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The request currently awaiting a response, if any.
    pub fn in_flight(&self) -> Option<&ProductQuery> {
        self.in_flight.as_ref()
    }

    /// Snapshot of what a request issued now would ask for.
    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            page: self.page,
            vendor: self.vendor.clone(),
            category: self.category.clone(),
            status: self.status,
        }
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 1;
    }

    pub fn select_status(&mut self, status: Option<VeganStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Marks a request for the current query as in flight. Returns `None`
    /// when another request is still outstanding.
    pub fn begin(&mut self) -> Option<ProductQuery> {
        if self.in_flight.is_some() {
            return None;
        }
        let query = self.query();
        self.in_flight = Some(query.clone());
        Some(query)
    }

    /// Clears the in-flight marker if it belongs to `query`. Returns whether
    /// it did.
    pub fn finish(&mut self, query: &ProductQuery) -> bool {
        if self.in_flight.as_ref() == Some(query) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}
