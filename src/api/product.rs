use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::{transport_error, ApiClient},
    types::{ApiError, ProductListResponse, ProductResponse, SaveProductRequest},
};

impl ApiClient {
    pub async fn list_products(
        &self,
        search: Option<&str>,
    ) -> Result<ProductListResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut url = format!("{}/products", base_url);
        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            url = format!(
                "{}?search={}",
                url,
                utf8_percent_encode(search, NON_ALPHANUMERIC)
            );
        }
        let response = self
            .http_client()
            .get(url)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn create_product(
        &self,
        payload: SaveProductRequest,
    ) -> Result<ProductResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/products", base_url))
            .headers(self.auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn update_product(
        &self,
        product_id: &str,
        payload: SaveProductRequest,
    ) -> Result<ProductResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/products/{}", base_url, product_id))
            .headers(self.auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn delete_product(&self, product_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/products/{}", base_url, product_id))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_ok(response).await
    }
}
