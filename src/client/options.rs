//! Client connection options.
//!
//! Provides a type-safe description of where the coffee server listens and
//! how long requests may wait for their reply.
//!
//! # Example
//!
//! ```ignore
//! use coffee_lpu237::{ClientOptions, Scheme};
//!
//! let options = ClientOptions::new()
//!     .with_scheme(Scheme::Ws)
//!     .with_port(8080);
//!
//! assert_eq!(options.url()?, "ws://127.0.0.1:8080/");
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Host used when no host is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

// ============================================================================
// Scheme
// ============================================================================

/// WebSocket URL scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Plain WebSocket.
    Ws,
    /// WebSocket over TLS (requires the `tls` feature).
    #[default]
    Wss,
}

impl Scheme {
    /// Returns the default port for the scheme.
    #[inline]
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Ws => 80,
            Self::Wss => 443,
        }
    }

    /// Returns the scheme as it appears in a URL.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ws => "ws",
            Self::Wss => "wss",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ClientOptions
// ============================================================================

/// Where and how the client connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// URL scheme.
    pub scheme: Scheme,

    /// Server host name or address.
    pub host: String,

    /// Server port; `None` uses the scheme default.
    pub port: Option<u16>,

    /// Maximum wait for one reply; `None` waits forever.
    ///
    /// A timed-out request keeps its place in the channel queue so that the
    /// late reply does not complete the next request.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl ClientOptions {
    /// Creates options for `wss://127.0.0.1:443` without request timeout.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: Scheme::Wss,
            host: DEFAULT_HOST.to_string(),
            port: None,
            request_timeout: None,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl ClientOptions {
    /// Sets the URL scheme.
    #[inline]
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the server host.
    #[inline]
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the server port.
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the per-request timeout.
    #[inline]
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

// ============================================================================
// Conversion Methods
// ============================================================================

impl ClientOptions {
    /// Returns the effective port.
    #[inline]
    #[must_use]
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.scheme.default_port())
    }

    /// Renders the WebSocket endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if host or port cannot form a URL.
    pub fn url(&self) -> Result<String> {
        if self.host.trim().is_empty() {
            return Err(Error::config("host must not be empty"));
        }
        if self.port == Some(0) {
            return Err(Error::config("port must not be 0"));
        }

        let raw = format!("{}://{}:{}", self.scheme, self.host, self.effective_port());
        let url = Url::parse(&raw).map_err(|e| Error::config(format!("invalid url {raw}: {e}")))?;
        Ok(url.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.scheme, Scheme::Wss);
        assert_eq!(options.effective_port(), 443);
        assert_eq!(options.request_timeout, None);
        assert_eq!(options.url().expect("url"), "wss://127.0.0.1/");
    }

    #[test]
    fn test_ws_default_port() {
        let options = ClientOptions::new().with_scheme(Scheme::Ws);
        assert_eq!(options.effective_port(), 80);
    }

    #[test]
    fn test_custom_port_and_host() {
        let options = ClientOptions::new()
            .with_scheme(Scheme::Ws)
            .with_host("localhost")
            .with_port(8080);
        assert_eq!(options.url().expect("url"), "ws://localhost:8080/");
    }

    #[test]
    fn test_empty_host_rejected() {
        let options = ClientOptions::new().with_host("  ");
        assert!(matches!(options.url(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_zero_port_rejected() {
        let options = ClientOptions::new().with_port(0);
        assert!(options.url().is_err());
    }

    #[test]
    fn test_timeout() {
        let options = ClientOptions::new().with_request_timeout(Duration::from_secs(3));
        assert_eq!(options.request_timeout, Some(Duration::from_secs(3)));
    }
}
