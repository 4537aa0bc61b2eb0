//! State graph: nodes + explicit edges (from → to) forming one linear chain.
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, then `compile` to get a
//! `CompiledStateGraph`. Nodes return a new state that replaces the previous one.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;
use crate::graph::node_middleware::NodeMiddleware;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph: nodes plus explicit edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge(from, to)`, then
/// `compile()` or `compile_with_middleware()` to obtain an executable graph.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id). Each node has at most one outgoing edge.
    edges: Vec<(String, String)>,
    /// Optional node middleware; when set, `compile()` uses it. See `with_middleware`.
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            middleware: None,
        }
    }

    /// Attaches node middleware for fluent API. When set, `compile()` will use it.
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    /// Adds a node; replaces any node registered under the same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit. Both ids (except
    /// START/END) must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Builds the executable graph: validates that all edge node ids exist and
    /// edges form a single linear chain from START to END.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        let middleware = self.middleware.clone();
        self.compile_internal(middleware)
    }

    /// Builds the executable graph with node middleware wrapping each node.run.
    pub fn compile_with_middleware(
        self,
        middleware: Arc<dyn NodeMiddleware<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(Some(middleware))
    }

    fn compile_internal(
        self,
        middleware: Option<Arc<dyn NodeMiddleware<S>>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        let mut start_edges = self.edges.iter().filter(|(f, _)| f == START);
        let first = match (start_edges.next(), start_edges.next()) {
            (None, _) => return Err(CompilationError::MissingStart),
            (Some((_, to)), None) => to.clone(),
            (Some(_), Some(_)) => {
                return Err(CompilationError::InvalidChain(
                    "multiple edges from START (branch)".into(),
                ))
            }
        };
        if first == END {
            return Err(CompilationError::InvalidChain(
                "START connects directly to END".into(),
            ));
        }
        if !self.edges.iter().any(|(_, t)| t == END) {
            return Err(CompilationError::MissingEnd);
        }

        let mut linear_next: HashMap<&str, &str> = HashMap::new();
        for (from, to) in self.edges.iter().filter(|(f, _)| f != START) {
            if linear_next.insert(from.as_str(), to.as_str()).is_some() {
                return Err(CompilationError::InvalidChain(format!(
                    "duplicate edge from {} (branch)",
                    from
                )));
            }
        }

        let mut edge_order = vec![first.clone()];
        let mut visited = HashSet::from([first.as_str()]);
        let mut current = first.as_str();
        loop {
            let next = match linear_next.get(current) {
                Some(n) => *n,
                None => {
                    return Err(CompilationError::InvalidChain(format!(
                        "chain stops at {} before END",
                        current
                    )))
                }
            };
            if next == END {
                break;
            }
            if !visited.insert(next) {
                return Err(CompilationError::InvalidChain("cycle detected".into()));
            }
            edge_order.push(next.to_string());
            current = next;
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edge_order,
            middleware,
        })
    }
}
