//! Axum app: state, router, and the two page handlers.
//!
//! `GET /` renders the empty form; `POST /` (form field `topic`) runs the pipeline
//! and renders its three outputs. `/static/*` is served from [`AppState::static_dir`].

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::info;
use triptych::Pipeline;

use crate::error::ServeError;
use crate::page::{self, PageResult};

/// Env var for the static files directory.
pub const ENV_STATIC_DIR: &str = "TRIPTYCH_STATIC_DIR";

const DEFAULT_STATIC_DIR: &str = "static";

/// Shared state for the HTTP server.
///
/// **Interaction**: Built by the CLI (`triptych serve`) or tests, passed to
/// [`run_serve`](crate::run_serve) / [`run_serve_on_listener`](crate::run_serve_on_listener).
pub struct AppState {
    /// Pipeline used by every request; its memory scope decides whether requests share a transcript.
    pub pipeline: Arc<Pipeline>,
    /// Directory mounted at `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// State with the static directory from `TRIPTYCH_STATIC_DIR` (default `static`).
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            pipeline,
            static_dir: static_dir_from_env(),
        }
    }

    pub fn with_static_dir(self, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
            ..self
        }
    }
}

fn static_dir_from_env() -> PathBuf {
    std::env::var(ENV_STATIC_DIR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
        .into()
}

#[derive(Debug, Deserialize)]
struct TopicForm {
    topic: String,
}

/// Builds the router: the page at `/` plus static files under `/static`.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    Router::new()
        .route("/", get(index).post(submit))
        .nest_service("/static", static_files)
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(page::render(None))
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TopicForm>,
) -> Result<Html<String>, ServeError> {
    if form.topic.trim().is_empty() {
        return Err(ServeError::EmptyTopic);
    }
    let topic = form.topic.as_str();
    info!(topic, "research request");
    let output = state.pipeline.run(topic).await?;
    Ok(Html(page::render(Some(&PageResult {
        topic,
        output: &output,
    }))))
}
