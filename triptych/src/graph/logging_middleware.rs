//! Logging middleware that prints node enter/exit around each node.run call.
//!
//! Installed by the CLI with `--verbose`.

use async_trait::async_trait;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::time::Instant;

use crate::error::AgentError;
use crate::graph::Next;

use super::{NodeMiddleware, NodeRunFn};

/// Middleware that logs node enter/exit (and elapsed time) around each node.run call.
///
/// Logs to stderr so that normal output (the stage results) can be redirected
/// separately. Generic over state type `S`; only node_id is logged.
pub struct LoggingNodeMiddleware<S> {
    _phantom: PhantomData<fn(S)>,
}

impl<S> Default for LoggingNodeMiddleware<S> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

#[async_trait]
impl<S> NodeMiddleware<S> for LoggingNodeMiddleware<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: NodeRunFn<S>,
    ) -> Result<(S, Next), AgentError> {
        eprintln!("[node] enter node={}", node_id);
        let started = Instant::now();
        let result = inner(state).await;
        let ms = started.elapsed().as_millis();
        match &result {
            Ok((_, next)) => eprintln!("[node] exit node={} next={:?} ms={}", node_id, next, ms),
            Err(e) => eprintln!("[node] exit node={} error={} ms={}", node_id, e, ms),
        }
        result
    }
}
