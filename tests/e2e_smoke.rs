// tests/e2e_smoke.rs
//
// End-to-end smoke: a real PollSession driving the HTTP client against a
// mock server. First listing reports a processing video, the next one
// reports it ready; the session must follow the transition and stop.

use std::sync::Arc;
use std::time::Duration;

use streamify_client::credentials::CredentialStore;
use streamify_client::{ApiClient, ClientConfig, MemoryStore, Phase, PollSession};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROCESSING: &str = r#"[
    {"id": 1, "status": "processing", "s3_key": "uploads/1/a.mp4",
     "created_at": "2025-06-01T12:00:00Z"}
]"#;

const READY: &str = r#"[
    {"id": 1, "status": "ready", "s3_key": "uploads/1/a.mp4",
     "created_at": "2025-06-01T12:00:00Z"}
]"#;

#[tokio::test]
async fn session_follows_processing_to_ready_over_http() {
    let server = MockServer::start().await;

    // First poll sees the transient state, later polls see the terminal one.
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(header("authorization", "Bearer tok-e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PROCESSING, "application/json"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(READY, "application/json"))
        .mount(&server)
        .await;

    let client = Arc::new(ApiClient::new(&ClientConfig {
        base_url: server.uri(),
        poll_interval_ms: 50,
        request_timeout_ms: 2_000,
    }));
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryStore::with_token("tok-e2e"));
    let session = PollSession::new(client, store, Duration::from_millis(50));

    session.refresh().await;
    assert_eq!(session.phase(), Phase::Scheduled);
    assert_eq!(session.snapshot().processing, 1);

    // Give the armed timer time to fire and observe the terminal listing.
    for _ in 0..50 {
        if session.phase() == Phase::Stopped {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(session.phase(), Phase::Stopped);
    let snap = session.snapshot();
    assert_eq!(snap.total, 1);
    assert_eq!(snap.processing, 0);
    assert!(!snap.loading);

    session.cancel();
}
