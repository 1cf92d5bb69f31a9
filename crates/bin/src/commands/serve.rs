//! Serve command - runs the aiguide web server.

use std::{sync::Arc, time::Duration};

use tokio::net::TcpListener;

use aiguide::{
    Clock, RandomSource, SeededRandom, SystemClock, ThreadRandom,
    auth::{AuthService, TokenSigner},
    catalog::TopicMatcher,
    server::AppState,
    user::CredentialStore,
};

use super::load_catalog;
use crate::cli::ServeArgs;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Run the aiguide server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let token_ttl = token_ttl(args.token_ttl_days)?;

    let catalog = Arc::new(load_catalog(&args.catalog)?);

    let signer = match args.token_secret.as_deref() {
        Some(secret) => TokenSigner::from_secret(secret)?,
        None => {
            tracing::warn!(
                "No token secret configured (AIGUIDE_TOKEN_SECRET); using a random key. \
                 Issued tokens will be invalid after a restart."
            );
            TokenSigner::generate()
        }
    };

    let random: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => {
            tracing::info!("Using seeded tool selection (seed {seed})");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = Arc::new(CredentialStore::new());
    let auth = Arc::new(
        AuthService::new(store, signer, Arc::clone(&clock))
            .with_token_ttl(token_ttl),
    );
    let matcher = Arc::new(TopicMatcher::new(catalog, random));
    let state = AppState::new(auth, matcher, clock);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    println!("aiguide server started on http://localhost:{}", local_addr.port());
    println!();
    println!("Available endpoints:");
    println!("  GET  /health            - Health check");
    println!("  POST /api/auth/register - Create an account");
    println!("  POST /api/auth/login    - Log in");
    println!("  POST /api/chat          - Ask for a tool (requires bearer token)");
    println!();
    println!("Press Ctrl+C to shutdown");

    aiguide::server::serve(listener, state, shutdown_signal()).await?;

    println!("Server shut down");
    Ok(())
}

/// Convert `--token-ttl-days` into a lifetime, rejecting zero and overflow.
fn token_ttl(days: u64) -> Result<Duration, String> {
    if days == 0 {
        return Err("--token-ttl-days must be at least 1".to_string());
    }
    days.checked_mul(SECS_PER_DAY)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("--token-ttl-days {days} is too large"))
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
        _ = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
