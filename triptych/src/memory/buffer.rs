//! In-memory buffer. Not persistent, not bounded.

use std::sync::{PoisonError, RwLock};

use super::{ConversationMemory, Speaker, Turn};

/// Unbounded in-memory transcript.
///
/// The write lock is held for one turn (or one exchange) only, so two runs sharing
/// one buffer interleave exchange by exchange in completion order.
///
/// **Interaction**: Used as `Arc<dyn ConversationMemory>` by `LlmStage` and `Pipeline`.
#[derive(Debug, Default)]
pub struct BufferMemory {
    turns: RwLock<Vec<Turn>>,
}

impl BufferMemory {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer pre-filled with `turns` (e.g. to resume an earlier transcript).
    pub fn with_turns(turns: Vec<Turn>) -> Self {
        Self {
            turns: RwLock::new(turns),
        }
    }
}

impl ConversationMemory for BufferMemory {
    fn append(&self, speaker: Speaker, text: String) {
        // A push never leaves the Vec half-written; poisoning carries no broken invariant.
        self.turns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Turn { speaker, text });
    }

    fn append_exchange(&self, input: String, output: String) {
        let mut turns = self.turns.write().unwrap_or_else(PoisonError::into_inner);
        turns.push(Turn::user(input));
        turns.push(Turn::assistant(output));
    }

    fn turns(&self) -> Vec<Turn> {
        self.turns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.turns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
