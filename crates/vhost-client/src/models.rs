//! Wire records exchanged with the `/vhost/` endpoints.
//!
//! Every field is required on decode and always present on encode. Unknown
//! fields in server responses are ignored.

use serde::{Deserialize, Serialize};

/// Payload for `POST /vhost/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddRequest {
    /// Name fragment the server turns into a full hostname.
    pub host_prefix: String,
    /// Internal address the hostname routes to.
    pub target: String,
}

impl AddRequest {
    /// Create a request for the given prefix and target.
    #[must_use]
    pub fn new(host_prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            host_prefix: host_prefix.into(),
            target: target.into(),
        }
    }
}

/// Body returned by a successful `POST /vhost/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddResponse {
    /// Full hostname assigned by the server.
    pub hostname: String,
}

/// One directory entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListHost {
    /// Public hostname.
    pub hostname: String,
    /// Internal target the hostname routes to.
    pub target: String,
}

impl ListHost {
    /// Create an entry.
    #[must_use]
    pub fn new(hostname: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            target: target.into(),
        }
    }
}

/// Body returned by a successful `GET /vhost/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ListResponse {
    /// Entries in server order.
    pub hosts: Vec<ListHost>,
}
