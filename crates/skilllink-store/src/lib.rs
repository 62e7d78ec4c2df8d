//! Session store abstraction for SkillLink.
//!
//! Provides the [`SessionStore`] trait — durable key/value persistence that
//! survives a process restart — plus two implementations:
//!
//! - [`MemoryStore`] — plain in-memory map, for tests and ephemeral sessions
//! - [`JsonFileStore`] — single-file JSON persistence (`file` feature, default)
//!
//! # How it fits in the stack
//!
//! ```text
//! Session Layer (above)  ← sole writer of the token and user-record keys
//!     ↕
//! Store Layer (this crate)  ← durable key/value persistence
//! ```
//!
//! The store itself gives no atomicity guarantee across keys. The session
//! layer treats the token/user pair as a single logical unit and clears
//! both keys when it finds one without the other.
//!
//! # Feature Flags
//!
//! - `file` (default) — JSON-file-backed store via `serde_json`

mod error;
#[cfg(feature = "file")]
mod file;
mod memory;

pub use error::StoreError;
#[cfg(feature = "file")]
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Durable key/value persistence scoped to one installation of the app.
///
/// Modeled after browser-local storage: string keys, string values, and
/// three total operations. Every operation is fallible so that file-backed
/// implementations can surface I/O errors; [`MemoryStore`] never errors.
pub trait SessionStore: Send + 'static {
    /// Stores `value` under `key`, overwriting unconditionally.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing medium rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Returns the value stored under `key`, or `None` if the key was
    /// never set or has been removed.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Removes `key` if present. Removing an absent key is a no-op.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing medium rejects the write.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
