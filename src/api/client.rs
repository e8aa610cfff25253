use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config, utils::storage as storage_utils};

/// Thin typed wrapper over the admin API. One instance is provided through
/// context at the router root; repositories share it via `Rc`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of resolving it from runtime config. Used
    /// by tests and by tooling that runs outside the browser.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Bearer header from the stored session, when one exists. Requests
    /// without a session go out bare and the server answers 401.
    pub(crate) fn auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        let token = storage_utils::local_storage()
            .ok()
            .and_then(|s| s.get_item(storage_utils::ACCESS_TOKEN_KEY).ok().flatten());
        if let Some(token) = token {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(header::AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_auth_session();
            Self::redirect_to_login_if_needed();
        }
    }

    pub(crate) fn clear_auth_session() {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(storage_utils::ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(storage_utils::CURRENT_USER_KEY);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == crate::router::routes::LOGIN {
                    return;
                }
            }
            let _ = location.set_href(crate::router::routes::LOGIN);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}

    /// Caches the session locally. Best effort: host test runs have no
    /// localStorage and simply skip it.
    pub(crate) fn persist_session(login: &LoginResponse) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.set_item(storage_utils::ACCESS_TOKEN_KEY, &login.access_token);
            if let Ok(user) = serde_json::to_string(&login.user) {
                let _ = storage.set_item(storage_utils::CURRENT_USER_KEY, &user);
            }
        }
    }

    /// Decodes a success body, or maps a failure response onto [`ApiError`].
    pub(crate) async fn expect_json<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::decode_error(status, response).await)
        }
    }

    /// Like [`expect_json`] for endpoints whose success body is empty.
    pub(crate) async fn expect_ok(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::decode_error(status, response).await)
        }
    }

    // The auth service answers errors as `{message}`; other services use
    // `{error, code}`. Both are surfaced verbatim as the error text.
    async fn decode_error(status: StatusCode, response: Response) -> ApiError {
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return ApiError::request_failed(format!("Request failed: {}", e)),
        };
        if let Ok(error) = serde_json::from_slice::<ApiError>(&body) {
            return error;
        }
        if let Ok(message) = serde_json::from_slice::<MessageResponse>(&body) {
            return ApiError {
                error: message.message,
                code: status_code_label(status),
                details: None,
            };
        }
        ApiError::request_failed(format!("Request failed with status {}", status.as_u16()))
    }
}

fn status_code_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}

pub(crate) fn transport_error(e: reqwest::Error) -> ApiError {
    ApiError::request_failed(format!("Request failed: {}", e))
}
