//! Handler errors and their HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use triptych::AgentError;

use crate::page;

#[derive(Debug, Error)]
pub enum ServeError {
    /// Submitted topic was empty or whitespace.
    #[error("topic must not be empty")]
    EmptyTopic,
    /// The pipeline failed (gateway failure or graph error).
    #[error(transparent)]
    Pipeline(#[from] AgentError),
}

impl ServeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::EmptyTopic => StatusCode::BAD_REQUEST,
            ServeError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ServeError::EmptyTopic => {
                warn!("rejected empty topic");
                self.to_string()
            }
            ServeError::Pipeline(e) => {
                error!(error = %e, "pipeline run failed");
                "The research pipeline failed. Check the server logs and try again.".to_string()
            }
        };
        (status, Html(page::render_error(&message))).into_response()
    }
}
