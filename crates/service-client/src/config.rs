use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_VERSION_PREFIX: &str = "/api/v1";

/// Settings for a [`ServiceClient`](crate::ServiceClient).
///
/// Deserializable so it can be embedded in a caller's own config file.
/// Timeouts are forwarded to the HTTP transport; the client adds no timeout
/// policy of its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Path segment inserted between the origin and every request path.
    /// Used verbatim; may be empty.
    pub version_prefix: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Connect-phase timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version_prefix: DEFAULT_VERSION_PREFIX.to_string(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn with_version_prefix(version_prefix: impl Into<String>) -> Self {
        Self {
            version_prefix: version_prefix.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// Build the reqwest transport these settings describe.
    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        builder.build()
    }
}
