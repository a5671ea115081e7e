//! Search filter handling.
//!
//! Turns the three filter fields into the query string of a list request.

use serde::Serialize;

use crate::errors::ClientError;

/// Raw text of the search fields as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub name: String,
    pub min_price: String,
    pub max_price: String,
}

/// Wire form of the filters. Field order is the order of the query string.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_price: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_price: Option<&'a str>,
}

impl SearchFilters {
    pub fn new(
        name: impl Into<String>,
        min_price: impl Into<String>,
        max_price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            min_price: min_price.into(),
            max_price: max_price.into(),
        }
    }

    /// Encode the non-empty fields as `name=..&minPrice=..&maxPrice=..`.
    ///
    /// Empty fields are left out entirely. Values are percent-encoded.
    pub fn to_query_string(&self) -> Result<String, ClientError> {
        let params = SearchParams {
            name: non_empty(&self.name),
            min_price: non_empty(&self.min_price),
            max_price: non_empty(&self.max_price),
        };
        Ok(serde_urlencoded::to_string(params)?)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
