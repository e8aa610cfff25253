use crate::api::{ApiClient, ApiError, MessageResponse, RegisterRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.client.register(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn register_posts_to_auth_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/register")
                .json_body(json!({ "email": "a@b.com", "password": "Abc123!@" }));
            then.status(201)
                .json_body(json!({ "message": "Account created" }));
        });

        let client = ApiClient::new_with_base_url(server.url("/api"));
        let repo = RegisterRepository::new_with_client(Rc::new(client));
        let response = repo
            .register(RegisterRequest {
                email: "a@b.com".into(),
                password: "Abc123!@".into(),
            })
            .await
            .expect("register");

        assert_eq!(response.message, "Account created");
        mock.assert();
    }
}
