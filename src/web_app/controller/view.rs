// web_app/controller/view.rs - View model for the catalog page
//
// `PageView` is what the page shows at any moment: the rendered cards and the
// state of each page-level element (loading indicator, load-more control,
// vendor banner, empty placeholder). Components read it; only the controller
// writes it.

use crate::web_app::model::VeganStatus;
use crate::web_app::render::CardView;

pub const LOADING_TEXT: &str = "Loading products...";
pub const LOAD_ERROR_TEXT: &str = "Error loading products. Please refresh.";
pub const LOAD_MORE_LABEL: &str = "Load More";
pub const LOAD_MORE_BUSY_LABEL: &str = "Loading...";
pub const EMPTY_STATE_TEXT: &str = "No products found.";
pub const ALL_LABEL: &str = "All";
pub const VENDOR_BANNER_PREFIX: &str = "Showing products from: ";

/// Fixed status facet, in display order
pub const STATUS_OPTIONS: [(&str, Option<VeganStatus>); 4] = [
    (ALL_LABEL, None),
    ("Vegan", Some(VeganStatus::Vegan)),
    ("Not Vegan", Some(VeganStatus::NonVegan)),
    ("Unsure", Some(VeganStatus::Unsure)),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingIndicator {
    #[default]
    Hidden,
    Loading,
    /// Stays until the user reloads or a later first-page fetch starts
    Failed,
}

impl LoadingIndicator {
    pub fn is_visible(self) -> bool {
        !matches!(self, LoadingIndicator::Hidden)
    }

    pub fn text(self) -> &'static str {
        match self {
            LoadingIndicator::Failed => LOAD_ERROR_TEXT,
            _ => LOADING_TEXT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadMoreControl {
    pub visible: bool,
    pub label: &'static str,
}

impl Default for LoadMoreControl {
    fn default() -> Self {
        Self {
            visible: false,
            label: LOAD_MORE_LABEL,
        }
    }
}

/// A card plus a key that is never reused within the page's lifetime
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCard {
    pub key: u64,
    pub card: CardView,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageView {
    pub cards: Vec<RenderedCard>,
    /// Set when the first page came back empty
    pub empty: bool,
    pub loading: LoadingIndicator,
    pub load_more: LoadMoreControl,
    /// Vendor name for the "Showing products from" banner
    pub vendor_banner: Option<String>,
}

impl PageView {
    pub fn clear_products(&mut self) {
        self.cards.clear();
        self.empty = false;
    }
}

/// One button in a filter panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption<T> {
    pub label: String,
    pub value: Option<T>,
    pub active: bool,
}

pub fn vendor_banner_text(vendor: &str) -> String {
    format!("{VENDOR_BANNER_PREFIX}{vendor}")
}
