use super::{ensure_success, read_json, ProductClient};
use crate::errors::ClientError;
use crate::models::Product;

impl ProductClient {
    /// GET `<base>?<query>` - list products matching an already encoded query.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<Product>, ClientError> {
        let response = self.client.get(self.collection_url(query)).send().await?;
        read_json(response).await
    }

    /// GET `<base>/<id>` - fetch a single product.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Product, ClientError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        read_json(response).await
    }

    /// POST `<base>` - create a product. Any `id` on the input is not sent.
    #[tracing::instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        let response = self
            .client
            .post(&self.url)
            .json(&product.without_id())
            .send()
            .await?;
        read_json(response).await
    }

    /// PUT `<base>/<id>` - replace a product. The identifier travels in the path only.
    #[tracing::instrument(skip(self, product), fields(name = %product.name))]
    pub async fn update(&self, id: i64, product: &Product) -> Result<Product, ClientError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(&product.without_id())
            .send()
            .await?;
        read_json(response).await
    }

    /// DELETE `<base>/<id>` - any response body is ignored.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
