// src/api/keys.rs
//
// API-key management. Keys authenticate programmatic uploads and are issued
// independently of the dashboard's bearer token; the full key is only ever
// returned once, at generation time.

use crate::api::{status_error, ApiClient};
use crate::error::ApiError;

#[derive(Debug, serde::Deserialize)]
pub struct NewApiKey {
    pub key: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiKeyStatus {
    pub exists: bool,
    #[serde(default)]
    pub last_four: String,
}

/// `POST /keys/generate`. Replaces any previously issued key.
pub async fn generate_key(client: &ApiClient, token: &str) -> Result<NewApiKey, ApiError> {
    let rsp = client.post_authed("/keys/generate", token).send().await?;
    if !rsp.status().is_success() {
        return Err(status_error(rsp).await);
    }
    rsp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /keys`. Reports whether a key exists and its last four characters.
pub async fn key_status(client: &ApiClient, token: &str) -> Result<ApiKeyStatus, ApiError> {
    let rsp = client.get("/keys", token).send().await?;
    if !rsp.status().is_success() {
        return Err(status_error(rsp).await);
    }
    rsp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}
