use serde::{Deserialize, Serialize};

use crate::time::now_iso;

/// Status flag carried by every envelope.
pub const STATUS_SUCCESS: &str = "success";

/// Fixed-shape wrapper for API output: a status flag, the caller's payload
/// unchanged, and the time the envelope was formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
    pub timestamp: String,
}

/// Wrap `data` for consistent API output.
///
/// The payload is moved in as-is, never inspected or copied; the timestamp
/// is read fresh from the clock on every call. Total over all inputs.
pub fn format_response<T>(data: T) -> Envelope<T> {
    let envelope = Envelope {
        status: STATUS_SUCCESS.to_string(),
        data,
        timestamp: now_iso(),
    };
    tracing::trace!(timestamp = %envelope.timestamp, "formatted response envelope");
    envelope
}
