use crate::api::{ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ChangePasswordRepository {
    client: Rc<ApiClient>,
}

impl ChangePasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn change_password(
        &self,
        current: String,
        new: String,
    ) -> Result<MessageResponse, ApiError> {
        self.client.change_password(current, new).await
    }
}
