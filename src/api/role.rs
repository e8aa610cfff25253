use super::{
    client::{transport_error, ApiClient},
    types::{ApiError, RoleResponse, SaveRoleRequest},
};

impl ApiClient {
    pub async fn list_roles(&self) -> Result<Vec<RoleResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/roles", base_url))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn create_role(&self, payload: SaveRoleRequest) -> Result<RoleResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/roles", base_url))
            .headers(self.auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn update_role(
        &self,
        role_id: &str,
        payload: SaveRoleRequest,
    ) -> Result<RoleResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/roles/{}", base_url, role_id))
            .headers(self.auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn delete_role(&self, role_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/roles/{}", base_url, role_id))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_ok(response).await
    }
}
