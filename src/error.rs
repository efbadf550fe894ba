use serde::Serialize;

/// All errors the progression engine can report to callers.
///
/// Storage failures never appear here — the repository degrades to defaults
/// and reports through the diagnostic log instead, so the worst case a
/// learner can see is "progress did not update".
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{what} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

// The game UI transports errors as plain strings over its bridge.
impl Serialize for ProgressError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProgressError>;
