use crate::api::{ApiClient, ApiError, ProductListResponse, ProductResponse, SaveProductRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProductRepository {
    client: Rc<ApiClient>,
}

impl ProductRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, search: Option<&str>) -> Result<ProductListResponse, ApiError> {
        self.client.list_products(search).await
    }

    pub async fn create(&self, payload: SaveProductRequest) -> Result<ProductResponse, ApiError> {
        self.client.create_product(payload).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: SaveProductRequest,
    ) -> Result<ProductResponse, ApiError> {
        self.client.update_product(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_product(id).await
    }
}
