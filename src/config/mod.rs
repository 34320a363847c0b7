//! Configuration types for the fulfillment order client.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: Settings shared by every request (API version, host override, user agent)
//! - [`ShopifyConfigBuilder`]: A builder for constructing [`ShopifyConfig`] instances
//! - [`ShopDomain`]: A validated Shopify shop domain
//! - [`HostUrl`]: A validated API host URL
//! - [`ApiVersion`]: The Shopify API version to use
//!
//! # Example
//!
//! ```rust
//! use shopify_fulfillment_orders::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_07)
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.api_version(), &ApiVersion::V2025_07);
//! ```

mod newtypes;
mod version;

pub use newtypes::{HostUrl, ShopDomain};
pub use version::ApiVersion;

/// Client configuration.
///
/// `ShopifyConfig` is `Clone`, `Send`, and `Sync`, so a single instance can be
/// shared by every client an application creates.
///
/// # API Host Override
///
/// When [`api_host`](Self::api_host) is set, requests are sent to that URL
/// instead of `https://{shop}`, with a `Host` header naming the shop. This is
/// how requests are routed through a proxy or a local mock server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopifyConfig {
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        ShopifyConfigBuilder::new().build()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shopify_fulfillment_orders::{ApiVersion, HostUrl, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .api_version(ApiVersion::V2024_10)
///     .api_host(HostUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests to `host` instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`], filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> ShopifyConfig {
        ShopifyConfig {
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
