//! REST client implementation for the Shopify Admin API.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::rest::{RestError, RestTransport};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};
use crate::session::Session;

/// REST API client for the Shopify Admin API.
///
/// Paths passed to [`get`](Self::get) and [`post`](Self::post) are normalized
/// to `*.json` and resolved under `/admin/api/{version}`. The typed
/// [`RestTransport`] implementation decodes bodies with `serde`.
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Deprecation Notice
///
/// The Shopify Admin REST API is deprecated. A warning is logged when this
/// client is constructed.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_fulfillment_orders::{RestClient, Session, ShopDomain};
///
/// let session = Session::new(ShopDomain::new("my-store").unwrap(), "access-token");
/// let client = RestClient::new(&session, None)?;
///
/// let response = client.get("orders/450789469/fulfillment_orders", None).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given session.
    ///
    /// Uses the API version from `config`, or the latest stable version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(session: &Session, config: Option<&ShopifyConfig>) -> Result<Self, RestError> {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());

        Self::create_client(session, config, api_version)
    }

    /// Creates a new REST client pinned to `version`, overriding the config.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn with_version(
        session: &Session,
        config: Option<&ShopifyConfig>,
        version: ApiVersion,
    ) -> Result<Self, RestError> {
        if let Some(cfg_version) = config.map(ShopifyConfig::api_version) {
            if &version == cfg_version {
                tracing::debug!(
                    "Rest client has a redundant API version override to the default {}",
                    cfg_version
                );
            } else {
                tracing::debug!(
                    "Rest client overriding default API version {} with {}",
                    cfg_version,
                    version
                );
            }
        }

        Self::create_client(session, config, version)
    }

    fn create_client(
        session: &Session,
        config: Option<&ShopifyConfig>,
        api_version: ApiVersion,
    ) -> Result<Self, RestError> {
        tracing::warn!(
            "The REST Admin API is deprecated. Consider migrating to GraphQL. See: https://www.shopify.com/ca/partners/blog/all-in-on-graphql"
        );

        if api_version.is_deprecated() {
            tracing::warn!(
                "API version {} is outside Shopify's support window (oldest supported: {})",
                api_version,
                ApiVersion::minimum_supported()
            );
        }

        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, session, config)?;

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the path prefix every request is resolved under.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.http_client.base_path()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

impl RestTransport for RestClient {
    async fn get_json<T>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned,
    {
        let response = self.get(path, query).await?;
        decode_body(path, response)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(RestError::Encode)?;
        let response = self.post(path, body, None).await?;
        decode_body(path, response)
    }
}

fn decode_body<T: DeserializeOwned>(path: &str, response: HttpResponse) -> Result<T, RestError> {
    serde_json::from_value(response.body).map_err(|source| RestError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Strips leading `/` and a trailing `.json`, then re-appends `.json`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("fulfillment_orders/7/move")?, "fulfillment_orders/7/move.json");
/// assert_eq!(normalize_path("/fulfillment_orders/7/move.json")?, "fulfillment_orders/7/move.json");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
