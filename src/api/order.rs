use super::{
    client::{transport_error, ApiClient},
    types::{ApiError, OrderListResponse, OrderResponse, UpdateOrderStatusRequest},
};

impl ApiClient {
    pub async fn list_orders(&self) -> Result<OrderListResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/orders", base_url))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: String,
    ) -> Result<OrderResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/orders/{}", base_url, order_id))
            .headers(self.auth_headers())
            .json(&UpdateOrderStatusRequest { status })
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn delete_order(&self, order_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/orders/{}", base_url, order_id))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_ok(response).await
    }
}
