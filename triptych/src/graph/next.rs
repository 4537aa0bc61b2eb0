//! Next-step result from a graph node: continue the chain or end it.

/// Next step after running a node.
///
/// - **Continue**: run the next node in the compiled order (END after the last one).
/// - **End**: stop; return current state as final result.
///
/// **Interaction**: Returned by `Node::run`; consumed by `CompiledStateGraph::invoke`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Next {
    /// Follow the linear edge order; if current node is last, equivalent to End.
    Continue,
    /// Stop and return the current state.
    End,
}
