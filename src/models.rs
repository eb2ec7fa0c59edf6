use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Field name to the list of values it may take.
pub type Where = HashMap<String, Vec<String>>;
/// Sort keys in the order they were requested.
pub type Order = Vec<OrderEntry>;
/// Field names to group by.
pub type Group = Vec<String>;
pub type Limit = i64;
pub type Skip = i64;
pub type Page = i64;
pub type PageSize = i64;

/// A single sort key: the field `name` and its direction `value`.
///
/// `value` is whatever direction token the caller sent (`asc`, `desc`, or
/// anything else), falling back to `"desc"` when none was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderEntry {
    /// Field to sort by.
    #[schema(example = "created_at")]
    pub name: String,
    /// Direction token.
    #[schema(example = "desc")]
    pub value: String,
}

impl OrderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Structured filter assembled from a query string.
///
/// # Where
/// Every query key that is not reserved becomes a `where` entry, its value
/// split on commas:
/// ```text
/// ?status=open,pending  ->  where = {"status": ["open", "pending"]}
/// ```
///
/// # Order
/// `order` takes a comma-separated list of `field` or `field.direction`:
/// ```text
/// ?order=name.asc,age  ->  [{"name": "name", "value": "asc"}, {"name": "age", "value": "desc"}]
/// ```
///
/// # Group
/// `group` takes a comma-separated list of field names.
///
/// # Pagination
/// `limit`, `skip`, `page` and `pageSize` are base-10 integers and stay `0`
/// when absent. See [`Pagination`](crate::pagination::Pagination) for how
/// they resolve into an offset/limit window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FilterSpec {
    /// Equality/membership constraints, keyed by field name.
    #[serde(rename = "where")]
    #[schema(value_type = HashMap<String, Vec<String>>)]
    pub where_clause: Where,
    #[schema(value_type = Vec<OrderEntry>)]
    pub order: Order,
    #[schema(value_type = Vec<String>)]
    pub group: Group,
    #[schema(value_type = i64, example = 10)]
    pub limit: Limit,
    #[schema(value_type = i64, example = 0)]
    pub skip: Skip,
    #[schema(value_type = i64, example = 1)]
    pub page: Page,
    #[serde(rename = "pageSize")]
    #[schema(value_type = i64, example = 20)]
    pub page_size: PageSize,
}

impl FilterSpec {
    /// Values requested for `field`, if it was filtered on.
    #[must_use]
    pub fn values(&self, field: &str) -> Option<&[String]> {
        self.where_clause.get(field).map(Vec::as_slice)
    }

    /// True when nothing at all was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
