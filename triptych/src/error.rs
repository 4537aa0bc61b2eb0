//! Pipeline execution error types.
//!
//! Returned by `Node::run`, `CompiledStateGraph::invoke` and `Pipeline::run`.

use thiserror::Error;

/// Error raised while running a stage or the graph that chains them.
///
/// Stages never catch a gateway failure: it travels through the graph unchanged
/// and ends the run. There is no partial result on error.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The LLM gateway call failed (transport, auth, rate limit, empty reply).
    #[error("gateway failure: {0}")]
    GatewayFailure(String),

    /// The graph could not run (e.g. no nodes, or it failed to compile).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

impl AgentError {
    /// True when the error came from the LLM gateway.
    pub fn is_gateway_failure(&self) -> bool {
        matches!(self, AgentError::GatewayFailure(_))
    }
}
