// web_app/model/mod.rs - Data models returned by the product API
//
// The backend is an external collaborator: these types only describe the
// response shape the client consumes, and are deliberately lenient about
// missing or empty fields.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Vegan status facet accepted by the listing endpoint's `status` parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VeganStatus {
    Vegan,
    NonVegan,
    Unsure,
}

impl VeganStatus {
    /// Value sent as the `status` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            VeganStatus::Vegan => "VEGAN",
            VeganStatus::NonVegan => "NON_VEGAN",
            VeganStatus::Unsure => "UNSURE",
        }
    }

    /// Case-insensitive parse of a server-supplied status string.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "vegan" => Some(VeganStatus::Vegan),
            "non_vegan" => Some(VeganStatus::NonVegan),
            "unsure" => Some(VeganStatus::Unsure),
            _ => None,
        }
    }
}

impl std::fmt::Display for VeganStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VeganStatus::Vegan => write!(f, "Vegan"),
            VeganStatus::NonVegan => write!(f, "Not Vegan"),
            VeganStatus::Unsure => write!(f, "Unsure"),
        }
    }
}

/// Product as listed by the API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    // Kept raw: unrecognised values still render as "Unknown"
    #[serde(default)]
    pub vegan_status: Option<String>,
}

impl Product {
    pub fn status(&self) -> Option<VeganStatus> {
        self.vegan_status.as_deref().and_then(VeganStatus::parse)
    }
}

/// One page of the product listing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub results: Vec<Product>,
    #[serde(default)]
    pub has_next: bool,
}

/// Accepts a JSON number, a numeric string, or null. Anything unparseable
/// becomes `None` so one bad price does not fail the whole page.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Some(serde_json::Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_param_values() {
        assert_eq!(VeganStatus::Vegan.as_param(), "VEGAN");
        assert_eq!(VeganStatus::NonVegan.as_param(), "NON_VEGAN");
        assert_eq!(VeganStatus::Unsure.as_param(), "UNSURE");
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(VeganStatus::parse("VEGAN"), Some(VeganStatus::Vegan));
        assert_eq!(VeganStatus::parse("vegan"), Some(VeganStatus::Vegan));
        assert_eq!(VeganStatus::parse("Non_Vegan"), Some(VeganStatus::NonVegan));
        assert_eq!(VeganStatus::parse("unSURE"), Some(VeganStatus::Unsure));
        assert_eq!(VeganStatus::parse("maybe"), None);
        assert_eq!(VeganStatus::parse(""), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(VeganStatus::Vegan.to_string(), "Vegan");
        assert_eq!(VeganStatus::NonVegan.to_string(), "Not Vegan");
        assert_eq!(VeganStatus::Unsure.to_string(), "Unsure");
    }

    #[test]
    fn test_product_page_deserialization() {
        let json = r#"{
            "results": [
                {
                    "name": "Oat Milk",
                    "description": "Barista edition",
                    "price": "189.50",
                    "image_url": "https://cdn.example.com/oat.png",
                    "product_link": "https://shop.example.com/oat",
                    "category": "Dairy Alternatives",
                    "vendor": "Zepto",
                    "vegan_status": "VEGAN"
                }
            ],
            "has_next": true
        }"#;

        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert!(page.has_next);
        assert_eq!(page.results.len(), 1);

        let product = &page.results[0];
        assert_eq!(product.name, "Oat Milk");
        assert_eq!(product.price, Some(Decimal::new(18950, 2)));
        assert_eq!(product.status(), Some(VeganStatus::Vegan));
    }

    #[test]
    fn test_product_with_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"name": "Mystery"}"#).unwrap();
        assert_eq!(product.name, "Mystery");
        assert!(product.description.is_none());
        assert!(product.price.is_none());
        assert!(product.category.is_none());
        assert!(product.status().is_none());
    }

    #[test]
    fn test_price_accepts_numbers_and_strings() {
        let cases = [
            (r#"{"name": "a", "price": 42}"#, Some(Decimal::new(42, 0))),
            (r#"{"name": "a", "price": 12.5}"#, Some(Decimal::new(125, 1))),
            (r#"{"name": "a", "price": " 7.25 "}"#, Some(Decimal::new(725, 2))),
            (r#"{"name": "a", "price": null}"#, None),
            (r#"{"name": "a", "price": "n/a"}"#, None),
        ];

        for (json, expected) in cases {
            let product: Product = serde_json::from_str(json).unwrap();
            assert_eq!(product.price, expected, "price for {}", json);
        }
    }

    #[test]
    fn test_has_next_defaults_to_false() {
        let page: ProductPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(!page.has_next);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_missing_results_is_an_error() {
        let page = serde_json::from_str::<ProductPage>(r#"{"has_next": false}"#);
        assert!(page.is_err());
    }
}
