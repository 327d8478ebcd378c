//! Identifiers for log correlation.
//!
//! Each process gets a ULID at startup (`get`), and every recommendation
//! computation gets its own fresh ULID (`generate`) that is recorded on the
//! computation's tracing span.

use once_cell::sync::Lazy;
use ulid::Ulid;

/// Process-level run ID, generated once at first access.
static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Returns the process-level run ID.
#[inline]
pub fn get() -> &'static str {
    &RUN_ID
}

/// Generates a fresh ULID (one per computation).
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}
