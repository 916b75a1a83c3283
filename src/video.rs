// src/video.rs
use chrono::{DateTime, Utc};

/// Processing lifecycle of a video as reported by the listing endpoint.
/// The worker only ever writes `processing`, `ready`, or `failed`; anything
/// else on the wire is treated as a failure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Processing,
    Ready,
    #[serde(other)]
    Failed,
}

impl VideoStatus {
    /// True while the remote system is still working on the video and the
    /// client must re-check it.
    pub fn is_transient(&self) -> bool {
        matches!(self, VideoStatus::Processing)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Video {
    pub id: i64,
    pub status: VideoStatus,
    pub s3_key: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
