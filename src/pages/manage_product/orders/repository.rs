use crate::api::{ApiClient, ApiError, OrderListResponse, OrderResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct OrderRepository {
    client: Rc<ApiClient>,
}

impl OrderRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<OrderListResponse, ApiError> {
        self.client.list_orders().await
    }

    pub async fn update_status(&self, id: &str, status: String) -> Result<OrderResponse, ApiError> {
        self.client.update_order_status(id, status).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_order(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn update_status_sends_new_status() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/orders/o1")
                .json_body(serde_json::json!({ "status": "shipped" }));
            then.status(200).json_body(serde_json::json!({
                "id": "o1",
                "customer_email": "buyer@example.com",
                "total": 42.0,
                "status": "shipped",
                "created_at": "2026-01-10T09:00:00Z"
            }));
        });

        let repo = OrderRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let order = repo
            .update_status("o1", "shipped".into())
            .await
            .expect("update status");
        mock.assert();
        assert_eq!(order.status, "shipped");
    }
}
