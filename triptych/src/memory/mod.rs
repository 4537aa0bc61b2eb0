//! # Memory: the conversation transcript shared by the stages
//!
//! Every stage renders the transcript into its prompt and then appends exactly one
//! user turn and one assistant turn. Turns are never reordered, pruned or evicted;
//! the log grows for as long as the handle lives.
//!
//! ## Scope
//!
//! The handle is passed to [`Pipeline`](crate::pipeline::Pipeline) explicitly.
//! [`MemoryScope::Process`] (the default) reuses one handle for every run, so
//! successive runs see earlier topics and concurrent runs interleave their turns
//! (one run's transcript may contain another run's turns).
//! [`MemoryScope::PerRun`] gives each run a fresh [`BufferMemory`].
//!
//! ## Render format
//!
//! One line per turn, `Human: <text>` or `AI: <text>`, joined with `\n`.
//! An empty memory renders as the empty string.

mod buffer;
mod turn;

pub use buffer::BufferMemory;
pub use turn::{Speaker, Turn};

/// Append-only ordered log of conversation turns.
///
/// `append` is O(1) and never fails. Implementations must be safe to share across
/// tasks (`Arc<dyn ConversationMemory>`); a turn is the unit of atomicity.
pub trait ConversationMemory: Send + Sync {
    /// Adds one turn at the end of the log.
    fn append(&self, speaker: Speaker, text: String);

    /// Snapshot of all turns in insertion order.
    fn turns(&self) -> Vec<Turn>;

    /// Appends a user turn followed by an assistant turn.
    ///
    /// Implementations that can should make the pair atomic so the two turns stay
    /// adjacent even when runs share the memory.
    fn append_exchange(&self, input: String, output: String) {
        self.append(Speaker::User, input);
        self.append(Speaker::Assistant, output);
    }

    /// Number of turns appended so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders all turns in insertion order. No side effects; calling it twice with
    /// no append in between yields the same string.
    fn render(&self) -> String {
        render_turns(&self.turns())
    }
}

/// Joins turns as `Human: ...` / `AI: ...` lines.
pub fn render_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(Turn::render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether pipeline runs share one memory handle or each get their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemoryScope {
    /// One transcript for the process lifetime, extended by every run.
    #[default]
    Process,
    /// A fresh transcript per run; nothing carries over between topics.
    PerRun,
}

impl std::str::FromStr for MemoryScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "process" | "shared" | "global" => Ok(Self::Process),
            "per-run" | "per_run" | "run" => Ok(Self::PerRun),
            _ => Err(format!(
                "unknown memory scope: {} (use process or per-run)",
                s
            )),
        }
    }
}

impl std::fmt::Display for MemoryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryScope::Process => f.write_str("process"),
            MemoryScope::PerRun => f.write_str("per-run"),
        }
    }
}
