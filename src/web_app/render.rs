// web_app/render.rs - Pure product card rendering
//
// Maps a `Product` to a `CardView`: every string the card shows, already
// defaulted and formatted. Components only lay the view out, so everything
// here is testable without a browser.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::web_app::config::CatalogConfig;
use crate::web_app::model::{Product, VeganStatus};

/// Descriptions longer than this many characters are cut and get `...`.
pub const DESCRIPTION_LIMIT: usize = 100;

pub const NO_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_CATEGORY: &str = "Pantry";
pub const DEFAULT_LINK: &str = "#";

const FILTER_BUTTON_BASE: &str = "w-full text-left px-4 py-3 rounded-lg transition-colors duration-200 dark:text-gray-300 hover:bg-green-50 dark:hover:bg-gray-800";

/// Presentation settings that affect card text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLocale {
    pub currency_symbol: String,
    pub placeholder_image: String,
}

impl From<&CatalogConfig> for CardLocale {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            placeholder_image: config.placeholder_image.clone(),
        }
    }
}

impl Default for CardLocale {
    fn default() -> Self {
        Self::from(&CatalogConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Red,
    Orange,
    Neutral,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Green => "bg-green-100 text-green-700 border border-green-200",
            BadgeTone::Red => "bg-red-100 text-red-700 border border-red-200",
            BadgeTone::Orange => "bg-orange-100 text-orange-700 border border-orange-200",
            BadgeTone::Neutral => "bg-gray-100 text-gray-600",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

/// Everything a product card displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    /// Empty when the product has no price
    pub price: String,
    pub image: String,
    pub link: String,
    pub category: String,
    pub vendor: Option<String>,
    pub badge: StatusBadge,
}

pub fn render_card(product: &Product, locale: &CardLocale) -> CardView {
    CardView {
        name: product.name.clone(),
        description: truncate_description(product.description.as_deref()),
        price: format_price(product.price, &locale.currency_symbol),
        image: non_empty(product.image_url.as_deref())
            .unwrap_or(&locale.placeholder_image)
            .to_string(),
        link: non_empty(product.product_link.as_deref())
            .unwrap_or(DEFAULT_LINK)
            .to_string(),
        category: non_empty(product.category.as_deref())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string(),
        vendor: non_empty(product.vendor.as_deref()).map(str::to_string),
        badge: status_badge(product.vegan_status.as_deref()),
    }
}

pub fn format_price(price: Option<Decimal>, currency_symbol: &str) -> String {
    match price {
        Some(price) => {
            let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{currency_symbol}{rounded:.2}")
        }
        None => String::new(),
    }
}

/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_description(description: Option<&str>) -> String {
    match non_empty(description) {
        Some(text) if text.chars().count() > DESCRIPTION_LIMIT => {
            let head: String = text.chars().take(DESCRIPTION_LIMIT).collect();
            format!("{head}...")
        }
        Some(text) => text.to_string(),
        None => NO_DESCRIPTION.to_string(),
    }
}

pub fn status_badge(raw: Option<&str>) -> StatusBadge {
    match raw.and_then(VeganStatus::parse) {
        Some(VeganStatus::Vegan) => StatusBadge {
            label: "Vegan",
            tone: BadgeTone::Green,
        },
        Some(VeganStatus::NonVegan) => StatusBadge {
            label: "Not Vegan",
            tone: BadgeTone::Red,
        },
        Some(VeganStatus::Unsure) => StatusBadge {
            label: "Unsure",
            tone: BadgeTone::Orange,
        },
        None => StatusBadge {
            label: "Unknown",
            tone: BadgeTone::Neutral,
        },
    }
}

/// Class list for a sidebar filter button.
pub fn filter_button_class(active: bool) -> String {
    if active {
        format!("{FILTER_BUTTON_BASE} bg-primary text-white")
    } else {
        format!("{FILTER_BUTTON_BASE} bg-white dark:bg-gray-900 text-gray-600")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
