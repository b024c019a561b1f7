use serde::{Deserialize, Serialize};

/// Payload of the server's `/status` liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Health label reported by the server, `"ok"` when healthy
    pub status: String,
    /// Server version string
    pub version: String,
    /// Seconds since the server process started
    pub uptime_seconds: u64,
}
