//! Conversion of typed option structs into query-string maps.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::rest::RestError;

/// Serializes a params struct into query parameters.
///
/// Top-level fields become keys. `null` values are skipped, arrays of
/// scalars are comma-joined, and nested objects are sent as JSON text.
///
/// # Errors
///
/// Returns [`RestError::Encode`] if `params` cannot be serialized.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use shopify_fulfillment_orders::rest::serialize_to_query;
///
/// #[derive(Serialize)]
/// struct Params {
///     limit: Option<u32>,
///     ids: Vec<u64>,
///     status: Option<String>,
/// }
///
/// let query = serialize_to_query(&Params { limit: Some(5), ids: vec![1, 2], status: None }).unwrap();
/// assert_eq!(query["limit"], "5");
/// assert_eq!(query["ids"], "1,2");
/// assert!(!query.contains_key("status"));
/// ```
pub fn serialize_to_query<T: Serialize>(params: &T) -> Result<HashMap<String, String>, RestError> {
    let value = serde_json::to_value(params).map_err(RestError::Encode)?;

    let Value::Object(map) = value else {
        return Ok(HashMap::new());
    };

    let query = map
        .into_iter()
        .filter_map(|(key, val)| query_value(val).map(|v| (key, v)))
        .collect();

    Ok(query)
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let joined: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            (!joined.is_empty()).then(|| joined.join(","))
        }
        object @ Value::Object(_) => Some(object.to_string()),
    }
}
