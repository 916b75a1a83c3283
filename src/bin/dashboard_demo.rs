//! Demo that drives one poll session against a running Streamify API and
//! prints dashboard snapshots until all videos reach a terminal state.
//!
//! Reads `STREAMIFY_TOKEN` (or a token file at `.streamify_token`) for the
//! bearer credential and the usual client config fallbacks for the base URL.

use std::sync::Arc;
use std::time::Duration;

use streamify_client::{config, ApiClient, FileStore, MemoryStore, Phase, PollSession};
use streamify_client::credentials::CredentialStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cfg = config::load_default()?;
    let client = Arc::new(ApiClient::new(&cfg));

    let store: Arc<dyn CredentialStore> = match std::env::var("STREAMIFY_TOKEN") {
        Ok(token) => Arc::new(MemoryStore::with_token(&token)),
        Err(_) => Arc::new(FileStore::new(".streamify_token")),
    };

    let session = PollSession::new(client, store, cfg.poll_interval());
    session.refresh().await;

    loop {
        let snap = session.snapshot();
        println!(
            "videos: {} total, {} processing{}",
            snap.total,
            snap.processing,
            if snap.loading { " (loading)" } else { "" }
        );
        for row in &snap.rows {
            println!("  #{} {:?} {} ({})", row.id, row.status, row.display_name, row.uploaded_at);
        }
        if session.phase() == Phase::Stopped {
            break;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    session.cancel();
    println!("dashboard-demo done");
    Ok(())
}
