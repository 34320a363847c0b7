//! Path prefixes for fulfillment order endpoints.
//!
//! Fulfillment orders are reached either at the top level or beneath a parent
//! resource. The prefix functions turn an optional parent (`resource`,
//! `resource_id`) into the leading path segments of a request:
//!
//! | resource        | resource_id | order prefix      | fulfillment order prefix |
//! |-----------------|-------------|-------------------|--------------------------|
//! | `""`            | any         | `orders`          | `fulfillment_orders`     |
//! | `"orders"`      | `None`      | `orders`          | `orders`                 |
//! | `"locations"`   | `Some(7)`   | `locations/7`     | `locations/7`            |
//!
//! # Example
//!
//! ```rust
//! use shopify_fulfillment_orders::rest::{order_path_prefix, PathScope};
//!
//! assert_eq!(order_path_prefix("", None), "orders");
//!
//! let scope = PathScope::nested("assigned_locations", 48752903);
//! assert_eq!(scope.order_prefix(), "assigned_locations/48752903");
//! ```

const ORDERS: &str = "orders";
const FULFILLMENT_ORDERS: &str = "fulfillment_orders";

/// Returns the prefix for paths rooted at an order.
///
/// An empty `resource` yields `"orders"`; otherwise the resource name,
/// followed by `/{resource_id}` when an id is given.
#[must_use]
pub fn order_path_prefix(resource: &str, resource_id: Option<u64>) -> String {
    prefix_or_default(resource, resource_id, ORDERS)
}

/// Returns the prefix for paths rooted at a fulfillment order.
///
/// An empty `resource` yields `"fulfillment_orders"`; otherwise the resource
/// name, followed by `/{resource_id}` when an id is given.
#[must_use]
pub fn fulfillment_order_path_prefix(resource: &str, resource_id: Option<u64>) -> String {
    prefix_or_default(resource, resource_id, FULFILLMENT_ORDERS)
}

fn prefix_or_default(resource: &str, resource_id: Option<u64>, default: &str) -> String {
    let resource = resource.trim_matches('/');
    match (resource, resource_id) {
        ("", _) => default.to_string(),
        (resource, None) => resource.to_string(),
        (resource, Some(id)) => format!("{resource}/{id}"),
    }
}

/// The parent context a fulfillment order service resolves paths under.
///
/// The default scope has no parent, so the top-level `orders` and
/// `fulfillment_orders` prefixes are used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathScope {
    resource: String,
    resource_id: Option<u64>,
}

impl PathScope {
    /// A scope naming a parent resource without an id.
    #[must_use]
    pub fn resource(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            resource_id: None,
        }
    }

    /// A scope nested under a specific parent resource instance.
    #[must_use]
    pub fn nested(resource: impl Into<String>, resource_id: u64) -> Self {
        Self {
            resource: resource.into(),
            resource_id: Some(resource_id),
        }
    }

    /// The parent resource name; empty for the default scope.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource
    }

    /// The parent resource id, if any.
    #[must_use]
    pub const fn resource_id(&self) -> Option<u64> {
        self.resource_id
    }

    /// See [`order_path_prefix`].
    #[must_use]
    pub fn order_prefix(&self) -> String {
        order_path_prefix(&self.resource, self.resource_id)
    }

    /// See [`fulfillment_order_path_prefix`].
    #[must_use]
    pub fn fulfillment_order_prefix(&self) -> String {
        fulfillment_order_path_prefix(&self.resource, self.resource_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resource_uses_defaults() {
        assert_eq!(order_path_prefix("", None), "orders");
        assert_eq!(order_path_prefix("", Some(5)), "orders");
        assert_eq!(fulfillment_order_path_prefix("", None), "fulfillment_orders");
        assert_eq!(fulfillment_order_path_prefix("/", Some(5)), "fulfillment_orders");
    }

    #[test]
    fn test_resource_without_id() {
        assert_eq!(order_path_prefix("orders", None), "orders");
        assert_eq!(
            fulfillment_order_path_prefix("fulfillment_orders", None),
            "fulfillment_orders"
        );
    }

    #[test]
    fn test_resource_with_id() {
        assert_eq!(order_path_prefix("locations", Some(7)), "locations/7");
        assert_eq!(
            fulfillment_order_path_prefix("/assigned_locations/", Some(48_752_903)),
            "assigned_locations/48752903"
        );
    }

    #[test]
    fn test_scope_prefixes() {
        let root = PathScope::default();
        assert_eq!(root.order_prefix(), "orders");
        assert_eq!(root.fulfillment_order_prefix(), "fulfillment_orders");
        assert_eq!(root.resource_name(), "");
        assert_eq!(root.resource_id(), None);

        let orders = PathScope::resource("orders");
        assert_eq!(
            format!("{}/{}/fulfillment_orders.json", orders.order_prefix(), 12345),
            "orders/12345/fulfillment_orders.json"
        );

        let nested = PathScope::nested("locations", 9);
        assert_eq!(nested.order_prefix(), "locations/9");
        assert_eq!(nested.fulfillment_order_prefix(), "locations/9");
        assert_eq!(nested.resource_id(), Some(9));
    }
}
