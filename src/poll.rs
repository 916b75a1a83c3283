// src/poll.rs
//
// Per-view poll session for the dashboard listing. One session owns its
// snapshot, its loading flag, and at most one pending timer; activation is
// guarded by a generation counter so a torn-down or superseded session can
// never apply a late fetch result or fire an orphaned timer.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use metrics::{counter, gauge};
use tokio::task::JoinHandle;

use crate::api::videos::VideoSource;
use crate::credentials::CredentialStore;
use crate::status;
use crate::video::Video;
use crate::view::{self, DashboardSnapshot};

/// Observable scheduler state.
///
/// `Idle -> Fetching -> (Scheduled | Stopped)`, with `Scheduled` looping back
/// into `Fetching` when the timer fires. `Stopped` is terminal until an
/// external trigger (manual refresh, upload completion) re-enters `refresh`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Scheduled,
    Stopped,
}

struct SessionState {
    videos: Vec<Video>,
    loading: bool,
    phase: Phase,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

pub struct PollSession {
    source: Arc<dyn VideoSource>,
    credentials: Arc<dyn CredentialStore>,
    interval: Duration,
    state: Mutex<SessionState>,
}

impl PollSession {
    pub fn new(
        source: Arc<dyn VideoSource>,
        credentials: Arc<dyn CredentialStore>,
        interval: Duration,
    ) -> Arc<Self> {
        crate::api::ensure_metrics_described();
        Arc::new(Self {
            source,
            credentials,
            interval,
            state: Mutex::new(SessionState {
                videos: Vec::new(),
                loading: true,
                phase: Phase::Idle,
                generation: 0,
                timer: None,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("poll session lock poisoned")
    }

    /// Activation entry point: mount, manual refresh, and "upload finished,
    /// re-sync now" all funnel here.
    ///
    /// Bumping the generation up front supersedes any in-flight fetch and
    /// cancels any pending timer, so at most one fetch result is ever applied
    /// per session at a time.
    pub async fn refresh(self: &Arc<Self>) {
        let gen = {
            let mut st = self.lock();
            st.generation += 1;
            if let Some(t) = st.timer.take() {
                t.abort();
            }
            st.phase = Phase::Fetching;
            st.generation
        };

        let Some(token) = self.credentials.get() else {
            // Unauthenticated: never fetch, never arm. Not a user-facing
            // error; the loading indicator just clears.
            let mut st = self.lock();
            if st.generation == gen {
                st.loading = false;
                st.phase = Phase::Stopped;
            }
            tracing::debug!(target: "poll", "no credential; session stopped");
            return;
        };

        counter!("poll_runs_total").increment(1);
        let result = self.source.list_videos(&token).await;

        let mut st = self.lock();
        if st.generation != gen {
            // Cancelled or superseded while the fetch was in flight.
            tracing::debug!(target: "poll", "stale fetch result discarded");
            return;
        }
        st.loading = false;

        match result {
            Ok(videos) => {
                let transient = status::processing_count(&videos);
                gauge!("videos_processing").set(transient as f64);
                tracing::info!(
                    target: "poll",
                    total = videos.len(),
                    processing = transient,
                    "listing synced"
                );
                st.videos = videos;
                if transient > 0 {
                    self.arm_timer(&mut st, gen);
                } else {
                    st.phase = Phase::Stopped;
                    counter!("poll_sessions_stopped_total").increment(1);
                }
            }
            Err(e) => {
                // Accepted behavior: no retry, no backoff. The previous
                // snapshot stays; only an external trigger resumes polling.
                counter!("poll_fetch_errors_total").increment(1);
                tracing::warn!(target: "poll", error = %e, "listing fetch failed; polling stopped");
                st.phase = Phase::Stopped;
                counter!("poll_sessions_stopped_total").increment(1);
            }
        }
    }

    fn arm_timer(self: &Arc<Self>, st: &mut SessionState, gen: u64) {
        if let Some(t) = st.timer.take() {
            t.abort();
        }
        let weak = Arc::downgrade(self);
        let interval = self.interval;
        st.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            tick(weak, gen).await;
        }));
        st.phase = Phase::Scheduled;
    }

    /// Teardown. Idempotent, callable from any state; after this, an
    /// in-flight fetch resolves into a discarded result and no timer fires.
    pub fn cancel(&self) {
        let mut st = self.lock();
        st.generation += 1;
        if let Some(t) = st.timer.take() {
            t.abort();
        }
        if st.phase != Phase::Stopped {
            st.phase = Phase::Stopped;
            counter!("poll_sessions_stopped_total").increment(1);
        }
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Render-ready view of the latest committed snapshot.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let st = self.lock();
        view::project(&st.videos, st.loading)
    }
}

impl Drop for PollSession {
    fn drop(&mut self) {
        if let Ok(mut st) = self.state.lock() {
            if let Some(t) = st.timer.take() {
                t.abort();
            }
        }
    }
}

async fn tick(weak: Weak<PollSession>, gen: u64) {
    let Some(session) = weak.upgrade() else {
        return;
    };
    let live = session.lock().generation == gen;
    if live {
        session.refresh().await;
    }
}
