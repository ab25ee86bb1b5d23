//! Per-run session identity.

use uuid::Uuid;

/// Opaque correlation token generated once per run and sent with every
/// backend request. Never regenerated for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Timestamp-derived fallback, kept for parity with hosts that lack a
    /// usable random source.
    pub fn from_timestamp() -> Self {
        Self(chrono::Utc::now().timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
