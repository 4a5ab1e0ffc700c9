// web_app/api/query.rs - Listing request parameters
//
// A `ProductQuery` is both the request description and the tag a response is
// matched against when it comes back, so it must capture every input that
// affects the listing.

use crate::web_app::model::VeganStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    /// 1-based page number
    pub page: u32,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub status: Option<VeganStatus>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            vendor: None,
            category: None,
            status: None,
        }
    }
}

impl ProductQuery {
    /// Query string pairs in the order the API expects them. `page` is always
    /// present; the filters only when set.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string())];
        if let Some(vendor) = &self.vendor {
            params.push(("vendor", vendor.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_param().to_string()));
        }
        params
    }
}
