// web_app/config.rs - Client and dev host configuration
//
// The client is compiled to WASM and cannot read the environment at runtime,
// so its API base is fixed at build time. The dev host reads its settings
// from the process environment (after loading `.env`).

/// Product API used when `CATALOG_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "https://vegan-backend-1zi7.onrender.com/api/products/";

/// Image shown when a product has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

/// Settings for the browser client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Listing endpoint; always ends with `/`
    pub api_base: String,
    pub placeholder_image: String,
    pub currency_symbol: String,
}

impl CatalogConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(api_base.into()),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(option_env!("CATALOG_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

fn normalize_base(base: String) -> String {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Settings for the static dev host binary
#[cfg(feature = "serve")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    pub site_root: String,
}

#[cfg(feature = "serve")]
impl ServerConfig {
    /// Reads `CATALOG_ADDR` and `CATALOG_SITE_ROOT`, falling back to
    /// `127.0.0.1:8080` and `dist`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            addr: non_empty("CATALOG_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            site_root: non_empty("CATALOG_SITE_ROOT").unwrap_or_else(|| "dist".to_string()),
        }
    }
}
