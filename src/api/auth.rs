use super::{
    client::{transport_error, ApiClient},
    types::{
        ApiError, ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse,
        RegisterRequest, UserResponse,
    },
};

impl ApiClient {
    /// Creates an account. Only email and password travel; the confirm
    /// field never leaves the client.
    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/register", base_url))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let login: LoginResponse = Self::expect_json(response).await?;
        Self::persist_session(&login);
        Ok(login)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/logout", base_url))
            .headers(self.auth_headers())
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(transport_error)?;
        // The local session goes regardless of what the server said.
        Self::clear_auth_session();
        Self::expect_ok(response).await
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/auth/me", base_url))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }

    pub async fn change_password(
        &self,
        current_password: String,
        new_password: String,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/auth/change-password", base_url))
            .headers(self.auth_headers())
            .json(&ChangePasswordRequest {
                current_password,
                new_password,
            })
            .send()
            .await
            .map_err(transport_error)?;
        Self::expect_json(response).await
    }
}
