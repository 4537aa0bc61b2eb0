//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds the nodes and their linear order (derived
//! from the explicit edges at compile time) plus optional node middleware.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::AgentError;

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state,
};
use super::node_middleware::NodeMiddleware;
use super::{Next, Node};

type NodeFuture<S> = Pin<Box<dyn Future<Output = Result<(S, Next), AgentError>> + Send>>;

/// Compiled graph: immutable structure, supports invoke only.
///
/// Runs nodes in `edge_order`, threading one state through them. A node returning
/// `Next::End` stops early; an error stops the run and is returned unchanged.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Linear order of nodes, first node (from START) first.
    pub(super) edge_order: Vec<String>,
    /// Optional node middleware; set when built with `compile_with_middleware` or `with_middleware`.
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node ids in execution order.
    pub fn edge_order(&self) -> &[String] {
        &self.edge_order
    }

    async fn execute_node(&self, node: Arc<dyn Node<S>>, state: S) -> Result<(S, Next), AgentError> {
        match &self.middleware {
            Some(middleware) => {
                let node_id = node.id().to_string();
                middleware
                    .around_run(
                        &node_id,
                        state,
                        Box::new(move |s: S| -> NodeFuture<S> {
                            Box::pin(async move { node.run(s).await })
                        }),
                    )
                    .await
            }
            None => node.run(state).await,
        }
    }

    /// Runs the graph from the first node to END.
    ///
    /// - `Next::Continue`: run the next node in edge_order, or end if last.
    /// - `Next::End`: stop and return current state.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        if self.edge_order.is_empty() {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }
        log_graph_start(self.edge_order.len());

        let mut state = state;
        for node_id in &self.edge_order {
            let node = self
                .nodes
                .get(node_id)
                .cloned()
                .ok_or_else(|| AgentError::ExecutionFailed(format!("node not found: {}", node_id)))?;

            log_node_start(node_id);
            log_node_state(node_id, &state);

            let (new_state, next) = match self.execute_node(node, state).await {
                Ok(output) => output,
                Err(e) => {
                    log_graph_error(node_id, &e);
                    return Err(e);
                }
            };
            log_node_complete(node_id, &next);
            state = new_state;

            if next == Next::End {
                break;
            }
        }

        log_graph_complete();
        Ok(state)
    }
}
