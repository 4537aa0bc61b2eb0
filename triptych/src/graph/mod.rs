//! Linear state graph: nodes + edges from START to END, compile and invoke.
//!
//! Build a `StateGraph`, chain its nodes with `add_edge` (using `START` and `END`),
//! compile it into a `CompiledStateGraph` (an ordered node list), then `invoke` with
//! the initial state. Transitions are unconditional; there is no branching, no
//! jumping and no retry.

mod compile_error;
mod compiled;
mod logging;
mod logging_middleware;
mod next;
mod node;
mod node_middleware;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
pub use logging_middleware::LoggingNodeMiddleware;
pub use next::Next;
pub use node::Node;
pub use node_middleware::{NodeMiddleware, NodeRunFn};
pub use state_graph::{StateGraph, END, START};
