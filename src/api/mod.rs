//! REST client for the product endpoint.
//!
//! One method per route of the catalog API. Methods return the raw outcome;
//! deciding what to log and what to refresh is left to the caller.

mod products;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::errors::ClientError;

/// Client bound to a single product endpoint base URL.
#[derive(Clone, Debug)]
pub struct ProductClient {
    url: String,
    client: reqwest::Client,
}

impl ProductClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// `<base>?<query>`. The separator is kept even for an empty query.
    fn collection_url(&self, query: &str) -> String {
        format!("{}?{}", self.url, query)
    }

    /// `<base>/<id>`
    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.url, id)
    }
}

/// Turn a non-success status into [`ClientError::Status`].
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Read the body as text and parse it, so that HTML error pages and the like
/// surface as decode errors rather than transport errors.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = ensure_success(response).await?.text().await?;
    Ok(serde_json::from_str(&body)?)
}
