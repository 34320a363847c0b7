//! The contract resource bindings use to reach the REST API.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::rest::RestError;

/// Typed JSON access to Shopify REST endpoints.
///
/// Resource services are generic over this trait and borrow an implementation
/// from the caller. [`RestClient`](crate::clients::rest::RestClient) is the
/// production implementation; tests can substitute a recording double.
///
/// Paths are relative to the API version root (for example
/// `orders/450789469/fulfillment_orders.json`). Implementations must make a
/// single attempt per call and return failures unchanged.
#[allow(async_fn_in_trait)]
pub trait RestTransport: Send + Sync {
    /// Sends a GET request and decodes the JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the body does not decode.
    async fn get_json<T>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned;

    /// Sends `body` as JSON in a POST request and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if encoding, the request, or decoding fails.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;
}
