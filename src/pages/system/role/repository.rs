use crate::api::{ApiClient, ApiError, RoleResponse, SaveRoleRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct RoleRepository {
    client: Rc<ApiClient>,
}

impl RoleRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<RoleResponse>, ApiError> {
        self.client.list_roles().await
    }

    pub async fn create(&self, payload: SaveRoleRequest) -> Result<RoleResponse, ApiError> {
        self.client.create_role(payload).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: SaveRoleRequest,
    ) -> Result<RoleResponse, ApiError> {
        self.client.update_role(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_role(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn list_fetches_roles() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/roles");
            then.status(200).json_body(serde_json::json!([
                { "id": "r1", "name": "admin", "permissions": ["users.read"] }
            ]));
        });

        let repo = RoleRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let roles = repo.list().await.expect("list roles");
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name, "admin");
    }
}
