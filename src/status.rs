// src/status.rs
//
// Aggregate status classification over a listing snapshot. Pure functions;
// the poll scheduler uses `any_processing` to decide whether to re-arm.

use crate::video::Video;

/// True iff at least one video is still in a transient state.
/// An empty snapshot has nothing to re-check.
pub fn any_processing(videos: &[Video]) -> bool {
    videos.iter().any(|v| v.status.is_transient())
}

pub fn processing_count(videos: &[Video]) -> usize {
    videos.iter().filter(|v| v.status.is_transient()).count()
}
