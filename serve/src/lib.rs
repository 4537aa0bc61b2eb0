//! HTTP front-end for triptych (axum).
//!
//! Listens on http://127.0.0.1:8000 by default (`TRIPTYCH_ADDR` overrides). `GET /`
//! shows a topic form; `POST /` runs research → summarize → critique and renders
//! the results; `/static/*` serves files from the static directory.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`AppState`].

mod app;
mod error;
mod page;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

pub use app::{AppState, ENV_STATIC_DIR};
pub use error::ServeError;

use app::router;

/// Env var for the listen address.
pub const ENV_ADDR: &str = "TRIPTYCH_ADDR";

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";

/// Listen address: `addr` if given, else `TRIPTYCH_ADDR`, else `127.0.0.1:8000`.
pub fn resolve_addr(addr: Option<&str>) -> String {
    addr.map(str::to_string)
        .or_else(|| std::env::var(ENV_ADDR).ok().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string())
}

/// Runs the HTTP server on an existing listener until the task is dropped.
/// Used by tests (bind to 127.0.0.1:0 then pass the listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    serve_until(listener, state, std::future::pending()).await
}

/// Runs the HTTP server on [`resolve_addr`]`(addr)` and stops on Ctrl-C.
pub async fn run_serve(
    addr: Option<&str>,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = resolve_addr(addr);
    let listener = TcpListener::bind(&addr).await?;
    serve_until(listener, state, ctrl_c()).await
}

async fn serve_until(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!(
        static_dir = %state.static_dir.display(),
        "HTTP server listening on http://{}", addr
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed it never resolves, so
/// the server keeps running instead of stopping at once.
async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C; graceful shutdown disabled");
            std::future::pending::<()>().await
        }
    }
}
