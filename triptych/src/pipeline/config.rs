//! Pipeline settings read from the environment.

use crate::memory::MemoryScope;

/// Env var selecting [`MemoryScope`]: `process` (default) or `per-run`.
pub const ENV_MEMORY_SCOPE: &str = "TRIPTYCH_MEMORY_SCOPE";

/// Pipeline settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub memory_scope: MemoryScope,
}

impl PipelineConfig {
    pub fn new(memory_scope: MemoryScope) -> Self {
        Self { memory_scope }
    }

    /// Reads `TRIPTYCH_MEMORY_SCOPE`. Unset or unparsable values fall back to
    /// [`MemoryScope::Process`]; an unparsable value is logged.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let memory_scope = match lookup(ENV_MEMORY_SCOPE) {
            Some(raw) if !raw.trim().is_empty() => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(value = %raw, error = %e, "ignoring {}", ENV_MEMORY_SCOPE);
                MemoryScope::default()
            }),
            _ => MemoryScope::default(),
        };
        Self { memory_scope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_process_scope() {
        assert_eq!(PipelineConfig::from_lookup(|_| None).memory_scope, MemoryScope::Process);
        assert_eq!(
            PipelineConfig::from_lookup(|_| Some("  ".into())).memory_scope,
            MemoryScope::Process
        );
    }

    #[test]
    fn reads_per_run_scope() {
        let cfg = PipelineConfig::from_lookup(|k| (k == ENV_MEMORY_SCOPE).then(|| "per-run".into()));
        assert_eq!(cfg.memory_scope, MemoryScope::PerRun);
    }

    #[test]
    fn unknown_scope_falls_back() {
        let cfg = PipelineConfig::from_lookup(|_| Some("session".into()));
        assert_eq!(cfg.memory_scope, MemoryScope::Process);
    }
}
