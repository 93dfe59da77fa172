use thiserror::Error;

/// Engine-boundary error type.
///
/// The engine itself is total: malformed payloads degrade to documented defaults
/// and never surface here. The only failure class is an unusable configuration,
/// rejected at construction time before any pagination runs.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid pagination config: {0}")]
    Config(String),
}
