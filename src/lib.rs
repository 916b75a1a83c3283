// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod poll;
pub mod status;
pub mod video;
pub mod view;

// ---- Re-exports for stable public API ----
pub use crate::api::videos::VideoSource;
pub use crate::api::ApiClient;
pub use crate::config::ClientConfig;
pub use crate::credentials::{CredentialStore, FileStore, MemoryStore};
pub use crate::error::ApiError;
pub use crate::poll::{Phase, PollSession};
pub use crate::video::{Video, VideoStatus};
pub use crate::view::{DashboardSnapshot, VideoRow};
