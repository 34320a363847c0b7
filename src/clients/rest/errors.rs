//! REST-specific error types.
//!
//! - [`RestError::InvalidPath`]: A REST API path fails validation
//! - [`RestError::Http`]: Wraps the underlying [`HttpError`] unchanged
//! - [`RestError::Encode`] / [`RestError::Decode`]: JSON conversion of typed
//!   request and response payloads
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_fulfillment_orders::clients::rest::RestError;
//!
//! match service.move_fulfillment_order(1046000789, 905684977).await {
//!     Ok(moved) => println!("{moved:?}"),
//!     Err(e @ RestError::Http(_)) => println!("HTTP error {:?}: {e}", e.status()),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use shopify_fulfillment_orders::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert!(error.to_string().contains("Invalid"));
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A response body did not match the expected shape.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// The request path whose response failed to decode.
        path: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl RestError {
    /// Returns the HTTP status code when the server answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e.code),
            Self::Http(HttpError::InvalidBody { code, .. }) => Some(*code),
            _ => None,
        }
    }

    /// Returns the `X-Request-Id` of a failed response, if Shopify sent one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify RestError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};

    #[test]
    fn test_invalid_path_error_message() {
        let error = RestError::InvalidPath {
            path: "/.json".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: /.json");
    }

    #[test]
    fn test_http_error_is_transparent() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 422,
            message: r#"{"errors":["Cannot move"]}"#.to_string(),
            error_reference: Some("req-1".to_string()),
        });
        let error: RestError = http_error.into();

        assert_eq!(error.to_string(), r#"{"errors":["Cannot move"]}"#);
        assert_eq!(error.status(), Some(422));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_status_absent_for_local_failures() {
        let error: RestError = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        })
        .into();
        assert_eq!(error.status(), None);
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_decode_error_names_path() {
        let source = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let error = RestError::Decode {
            path: "orders/1/fulfillment_orders.json".to_string(),
            source,
        };
        assert!(error
            .to_string()
            .contains("orders/1/fulfillment_orders.json"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
