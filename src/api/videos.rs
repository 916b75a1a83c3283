// src/api/videos.rs
use crate::api::{status_error, ApiClient};
use crate::error::ApiError;
use crate::video::Video;

/// Where a poll session gets its listing snapshots from. Object-safe so
/// sessions can run against the HTTP client or an in-process stub.
#[async_trait::async_trait]
pub trait VideoSource: Send + Sync {
    async fn list_videos(&self, token: &str) -> Result<Vec<Video>, ApiError>;
}

#[async_trait::async_trait]
impl VideoSource for ApiClient {
    /// `GET /videos` with a bearer token. A `null` or empty body is an empty
    /// listing, not an error; every failure path comes back as `ApiError`.
    async fn list_videos(&self, token: &str) -> Result<Vec<Video>, ApiError> {
        let rsp = self.get("/videos", token).send().await?;
        if !rsp.status().is_success() {
            return Err(status_error(rsp).await);
        }

        let body = rsp.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(Vec::new());
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Delete a single video. The dashboard refreshes the listing afterwards.
pub async fn delete_video(client: &ApiClient, token: &str, id: i64) -> Result<(), ApiError> {
    let rsp = client.delete(&format!("/videos/{id}"), token).send().await?;
    if !rsp.status().is_success() {
        return Err(status_error(rsp).await);
    }
    Ok(())
}
