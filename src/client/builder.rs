//! Builder pattern for client configuration.
//!
//! Provides a fluent API for configuring and creating [`Client`] instances.
//!
//! # Example
//!
//! ```no_run
//! use coffee_lpu237::{Client, Scheme};
//!
//! # fn example() -> coffee_lpu237::Result<()> {
//! let client = Client::builder()
//!     .scheme(Scheme::Ws)
//!     .port(8080)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::error::Result;

use super::core::Client;
use super::options::{ClientOptions, Scheme};

// ============================================================================
// ClientBuilder
// ============================================================================

/// Builder for configuring a [`Client`] instance.
///
/// Use [`Client::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct ClientBuilder {
    options: ClientOptions,
}

// ============================================================================
// ClientBuilder Implementation
// ============================================================================

impl ClientBuilder {
    /// Creates a new builder with default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL scheme (`wss` by default).
    #[inline]
    #[must_use]
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.options.scheme = scheme;
        self
    }

    /// Sets the server host (`127.0.0.1` by default).
    #[inline]
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.options.host = host.into();
        self
    }

    /// Sets the server port (scheme default otherwise).
    #[inline]
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.options.port = Some(port);
        self
    }

    /// Sets a per-request timeout.
    #[inline]
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options.request_timeout = Some(timeout);
        self
    }

    /// Replaces all options at once.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the client with validation.
    ///
    /// No connection is made until [`Client::connect`].
    ///
    /// # Errors
    ///
    /// - [`Error::Config`](crate::Error::Config) if host or port are invalid
    pub fn build(self) -> Result<Client> {
        self.options.url()?;
        Ok(Client::new(self.options))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default() {
        let client = ClientBuilder::new().build().expect("build");
        assert!(!client.is_connected());
        assert_eq!(client.options().effective_port(), 443);
    }

    #[test]
    fn test_build_custom() {
        let client = ClientBuilder::new()
            .scheme(Scheme::Ws)
            .host("localhost")
            .port(9000)
            .request_timeout(Duration::from_millis(500))
            .build()
            .expect("build");
        let options = client.options();
        assert_eq!(options.url().expect("url"), "ws://localhost:9000/");
        assert_eq!(options.request_timeout, Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_build_rejects_empty_host() {
        assert!(ClientBuilder::new().host("").build().is_err());
    }
}
