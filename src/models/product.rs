//! Product model matching the catalog API's product JSON.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A product record as exchanged with the catalog API.
///
/// A product without an `id` has not been created yet. Prices that are
/// missing, `null`, or unparseable on the way in are NaN, and NaN goes back
/// out as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default = "not_a_number", deserialize_with = "number_or_nan")]
    pub price: f64,
    #[serde(default = "not_a_number", deserialize_with = "number_or_nan")]
    pub discount_price: f64,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    /// Status value; the set of valid values is owned by the server
    #[serde(default, deserialize_with = "text_or_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub image_url: String,
}

impl Product {
    /// Copy of this record without its identifier, as sent in request bodies.
    pub fn without_id(&self) -> Product {
        Product {
            id: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|id| id.to_string()).unwrap_or_default();
        write!(
            f,
            "{:>5}  {:<24}  {:>10}  {:>10}  {:<14}  {}",
            id,
            self.name,
            format_price(self.price),
            format_price(self.discount_price),
            self.category,
            self.status
        )
    }
}

/// Format a price the way a browser prints a number: shortest round-trip
/// decimal, no trailing `.0`, `NaN` and `Infinity` spelled out.
///
/// Magnitudes of at least 1e21 or below 1e-6 switch to exponent form
/// (`1e+21`, `1.5e-7`), and negative zero prints as `0`.
pub fn format_price(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exponent = format!("{:e}", value);
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exponent,
        };
    }
    value.to_string()
}

fn not_a_number() -> f64 {
    f64::NAN
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let product: Product = serde_json::from_value(json!({
            "id": 5,
            "name": "Mug",
            "price": 9.99,
            "discountPrice": 7.99,
            "category": "Home",
            "status": "ACTIVE",
            "description": "d",
            "imageUrl": "u"
        }))
        .unwrap();

        assert_eq!(product.id, Some(5));
        assert_eq!(product.name, "Mug");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.discount_price, 7.99);
        assert_eq!(product.image_url, "u");
    }

    #[test]
    fn test_nulls_and_missing_fields() {
        let product: Product = serde_json::from_value(json!({
            "name": null,
            "price": null,
            "category": "Home"
        }))
        .unwrap();

        assert_eq!(product.id, None);
        assert_eq!(product.name, "");
        assert!(product.price.is_nan());
        assert!(product.discount_price.is_nan());
        assert_eq!(product.status, "");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "9.99");
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(f64::NAN), "NaN");
        assert_eq!(format_price(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_price_edge_values() {
        assert_eq!(format_price(-0.0), "0");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(1e21), "1e+21");
        assert_eq!(format_price(-2.5e30), "-2.5e+30");
        assert_eq!(format_price(1e20), "100000000000000000000");
        assert_eq!(format_price(1.5e-7), "1.5e-7");
        assert_eq!(format_price(0.000001), "0.000001");
    }

    #[test]
    fn test_new_product_body_has_no_id_and_nan_becomes_null() {
        let product = Product {
            id: Some(3),
            name: "Shirt".to_string(),
            price: f64::NAN,
            discount_price: 12.5,
            category: "Clothing".to_string(),
            status: "ACTIVE".to_string(),
            description: String::new(),
            image_url: String::new(),
        };

        let body = serde_json::to_value(product.without_id()).unwrap();
        assert!(body.get("id").is_none());
        assert!(body["price"].is_null());
        assert_eq!(body["discountPrice"], 12.5);
        assert_eq!(body["imageUrl"], "");
    }
}
