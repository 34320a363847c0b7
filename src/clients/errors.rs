//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Requests are attempted exactly once, so every variant describes the single
//! round trip that was made.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_fulfillment_orders::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {:?}", e.code, e.field_errors());
//!     }
//!     Err(HttpError::InvalidBody { code, source }) => {
//!         println!("Unreadable {code} response: {source}");
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use std::collections::HashMap;
use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// # JSON Message Format
///
/// `message` is a JSON object holding whichever of these the response carried:
/// - `errors`: Error messages (object keyed by field, array, or string)
/// - `error`: Single error message
/// - `error_description`: Description of the error
/// - `error_reference`: Debugging reference including X-Request-Id
///
/// # Example
///
/// ```rust
/// use shopify_fulfillment_orders::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 422,
///     message: r#"{"errors":{"new_location_id":["is not active"]}}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// let fields = error.field_errors();
/// assert_eq!(fields["new_location_id"], vec!["is not active".to_string()]);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Returns the remote error detail grouped by field.
    ///
    /// Object-shaped `errors` keep their keys. Array or string `errors`, and a
    /// bare `error` message, are filed under `"base"`. Returns an empty map
    /// when the message carries no recognizable detail.
    #[must_use]
    pub fn field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut result = HashMap::new();
        let Ok(detail) = serde_json::from_str::<serde_json::Value>(&self.message) else {
            return result;
        };

        match detail.get("errors") {
            Some(serde_json::Value::Object(map)) => {
                for (field, messages) in map {
                    result.insert(field.clone(), messages_from(messages));
                }
            }
            Some(errors @ (serde_json::Value::Array(_) | serde_json::Value::String(_))) => {
                let messages = messages_from(errors);
                if !messages.is_empty() {
                    result.insert("base".to_string(), messages);
                }
            }
            _ => {}
        }

        if let Some(error) = detail.get("error").and_then(serde_json::Value::as_str) {
            result
                .entry("base".to_string())
                .or_insert_with(Vec::new)
                .push(error.to_string());
        }

        result
    }
}

fn messages_from(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(ToString::to_string))
            .collect(),
        serde_json::Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

/// Error returned when an HTTP request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use shopify_fulfillment_orders::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A successful response whose body is not JSON.
    #[error("Response with status {code} did not contain valid JSON: {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
