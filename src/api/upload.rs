// src/api/upload.rs
use crate::api::{status_error, ApiClient};
use crate::error::ApiError;
use metrics::counter;

#[derive(Debug, serde::Deserialize)]
struct UploadResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Multipart `POST /upload` with the file under the `file` field.
///
/// On 2xx the server answers with JSON `{ "message": ... }`; a missing
/// message is tolerated. On failure the error body is plain text. After a
/// successful upload the caller should `refresh()` its poll session — the
/// new video enters the listing in a transient state.
pub async fn upload(
    client: &ApiClient,
    token: &str,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<String, ApiError> {
    counter!("uploads_total").increment(1);

    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);

    let rsp = client
        .post_authed("/upload", token)
        .multipart(form)
        .send()
        .await?;
    if !rsp.status().is_success() {
        return Err(status_error(rsp).await);
    }

    let body: UploadResponse = rsp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body
        .message
        .unwrap_or_else(|| "Upload successful".to_string()))
}
