use thiserror::Error;

/// Raised by repositories when no store connection can be obtained.
#[derive(Debug, Clone, Error)]
#[error("document store unavailable: {reason}")]
pub struct StoreUnavailable {
    pub reason: String,
}

impl StoreUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
