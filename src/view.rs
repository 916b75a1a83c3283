// src/view.rs
//
// Projection of the latest snapshot into render-ready aggregates. Pure and
// recomputed on read; listings are tens to low hundreds of items, so there
// is nothing worth memoizing.

use crate::status;
use crate::video::{Video, VideoStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct VideoRow {
    pub id: i64,
    pub status: VideoStatus,
    pub display_name: String,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub loading: bool,
    pub total: usize,
    pub processing: usize,
    pub rows: Vec<VideoRow>,
}

pub fn project(videos: &[Video], loading: bool) -> DashboardSnapshot {
    DashboardSnapshot {
        loading,
        total: videos.len(),
        processing: status::processing_count(videos),
        rows: videos.iter().map(row).collect(),
    }
}

fn row(video: &Video) -> VideoRow {
    VideoRow {
        id: video.id,
        status: video.status,
        display_name: display_name(video),
        uploaded_at: video.created_at.format("%b %-d, %Y %H:%M").to_string(),
    }
}

/// Title when set, else the original filename, else the tail of the storage
/// key (keys look like `uploads/{id}/{name}`).
fn display_name(video: &Video) -> String {
    if let Some(title) = video.title.as_deref() {
        if !title.trim().is_empty() {
            return title.trim().to_string();
        }
    }
    if let Some(name) = video.filename.as_deref() {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }
    video
        .s3_key
        .rsplit('/')
        .next()
        .unwrap_or(video.s3_key.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn video(id: i64, status: VideoStatus) -> Video {
        Video {
            id,
            status,
            s3_key: format!("uploads/{id}/clip.mp4"),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
            filename: None,
            title: None,
        }
    }

    #[test]
    fn counts_and_rows_follow_the_snapshot() {
        let vs = vec![
            video(1, VideoStatus::Ready),
            video(2, VideoStatus::Processing),
            video(3, VideoStatus::Failed),
        ];
        let snap = project(&vs, false);
        assert_eq!(snap.total, 3);
        assert_eq!(snap.processing, 1);
        assert!(!snap.loading);
        assert_eq!(snap.rows[1].status, VideoStatus::Processing);
        assert_eq!(snap.rows[0].uploaded_at, "Jun 1, 2025 09:30");
    }

    #[test]
    fn display_name_prefers_title_then_filename_then_key_tail() {
        let mut v = video(1, VideoStatus::Ready);
        assert_eq!(display_name(&v), "clip.mp4");

        v.filename = Some("holiday.mp4".into());
        assert_eq!(display_name(&v), "holiday.mp4");

        v.title = Some("Holiday cut".into());
        assert_eq!(display_name(&v), "Holiday cut");

        v.title = Some("   ".into());
        assert_eq!(display_name(&v), "holiday.mp4");
    }

    #[test]
    fn empty_listing_projects_cleanly() {
        let snap = project(&[], true);
        assert_eq!(snap.total, 0);
        assert_eq!(snap.processing, 0);
        assert!(snap.loading);
        assert!(snap.rows.is_empty());
    }
}
