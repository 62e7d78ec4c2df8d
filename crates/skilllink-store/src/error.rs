//! Error types for the store layer.

/// Errors that can occur in the store layer.
///
/// The in-memory store never produces any of these — every variant
/// comes from a store with a real backing medium behind it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the backing medium failed.
    #[error("store read failed: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the backing medium failed.
    #[error("store write failed: {0}")]
    Write(#[source] std::io::Error),

    /// The backing file exists but does not parse as a store snapshot.
    ///
    /// Common causes: a truncated write from a crashed process, or the
    /// file being edited by hand.
    #[cfg(feature = "file")]
    #[error("corrupt store file: {0}")]
    Corrupt(serde_json::Error),
}
