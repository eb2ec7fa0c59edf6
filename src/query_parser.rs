//! # Query string parsing
//!
//! Turns `action=test,example&order=name.asc,age&group=dept&limit=10` into a
//! [`FilterSpec`]. Six keys are reserved and routed to dedicated fields; every
//! other key becomes a `where` constraint.
//!
//! | Key | Field | Value |
//! |---|---|---|
//! | `order` | `order` | `field[.direction],...` |
//! | `group` | `group` | `field,...` |
//! | `limit` | `limit` | integer |
//! | `skip` | `skip` | integer |
//! | `page` | `page` | integer |
//! | `pageSize` | `pageSize` | integer |
//! | anything else | `where[key]` | `value,...` |
//!
//! Repeating a key replaces its earlier value. Tokens without `=` are ignored,
//! and only the text between the first and second `=` of a token is used as
//! its value.

use serde::de::DeserializeOwned;

use crate::decode::{query_component, unescape};
use crate::errors::ParseError;
use crate::models::FilterSpec;
use crate::sort::parse_order;
use crate::traits::FilterTarget;

/// How a query key is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Order,
    Group,
    Limit,
    Skip,
    Page,
    PageSize,
}

impl Keyword {
    const TABLE: [(&'static str, Self); 6] = [
        ("order", Self::Order),
        ("group", Self::Group),
        ("limit", Self::Limit),
        ("skip", Self::Skip),
        ("page", Self::Page),
        ("pageSize", Self::PageSize),
    ];

    fn lookup(key: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|&&(name, _)| name == key)
            .map(|&(_, keyword)| keyword)
    }
}

/// True for the six keys that never end up in the `where` clause.
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    Keyword::lookup(key).is_some()
}

fn parse_number(key: &str, value: &str) -> Result<i64, ParseError> {
    value
        .parse::<i64>()
        .map_err(|e| ParseError::invalid_number(key, value, e))
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

/// Apply one `key=value` token to the spec being built.
fn apply_param(spec: &mut FilterSpec, key: &str, value: &str) -> Result<(), ParseError> {
    match Keyword::lookup(key) {
        Some(Keyword::Order) => spec.order = parse_order(value),
        Some(Keyword::Group) => spec.group = split_list(value),
        Some(Keyword::Limit) => spec.limit = parse_number(key, value)?,
        Some(Keyword::Skip) => spec.skip = parse_number(key, value)?,
        Some(Keyword::Page) => spec.page = parse_number(key, value)?,
        Some(Keyword::PageSize) => spec.page_size = parse_number(key, value)?,
        None => {
            spec.where_clause.insert(key.to_string(), split_list(value));
        }
    }
    Ok(())
}

fn build_spec(query: &str) -> Result<FilterSpec, ParseError> {
    let decoded = unescape(query)?;
    let component = query_component(&decoded)?;

    let mut spec = FilterSpec::default();
    for token in component.split('&') {
        let mut parts = token.split('=');
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            tracing::trace!(token, "Skipping querystring token without '='");
            continue;
        };
        apply_param(&mut spec, key, value)?;
    }

    tracing::debug!(
        where_fields = spec.where_clause.len(),
        order_fields = spec.order.len(),
        group_fields = spec.group.len(),
        limit = spec.limit,
        skip = spec.skip,
        page = spec.page,
        page_size = spec.page_size,
        "Parsed querystring"
    );
    Ok(spec)
}

/// Parse `query` and write the result into `output`.
///
/// An empty query leaves `output` untouched. On error nothing is written.
///
/// # Errors
///
/// [`ParseError::Decode`] for bad percent-encoding,
/// [`ParseError::MalformedQuery`] when no query component remains after
/// decoding, [`ParseError::InvalidNumber`] when `limit`, `skip`, `page` or
/// `pageSize` is not an integer.
pub fn parse_into<T>(query: &str, output: &mut T) -> Result<(), ParseError>
where
    T: FilterTarget + ?Sized,
{
    if query.is_empty() {
        return Ok(());
    }

    let spec = build_spec(query).inspect_err(|e| {
        tracing::debug!(error = %e, kind = e.kind(), "Failed to parse querystring");
    })?;
    output.assign(spec);
    Ok(())
}

/// Parse `query` into a fresh [`FilterSpec`].
///
/// ```rust
/// use querystring_filter::{OrderEntry, parse};
///
/// let spec = parse("action=test,example&order=action,category&limit=10").unwrap();
/// assert_eq!(spec.where_clause["action"], ["test", "example"]);
/// assert_eq!(spec.order[1], OrderEntry::new("category", "desc"));
/// assert_eq!(spec.limit, 10);
/// ```
///
/// # Errors
///
/// See [`parse_into`].
pub fn parse(query: &str) -> Result<FilterSpec, ParseError> {
    let mut spec = FilterSpec::default();
    parse_into(query, &mut spec)?;
    Ok(spec)
}

/// Parse `query` and project the result onto any deserializable shape.
///
/// Field names follow the serialized [`FilterSpec`]: `where`, `order`,
/// `group`, `limit`, `skip`, `page`, `pageSize`. Fields `T` does not declare
/// are dropped; fields `T` declares with `#[serde(default)]` keep their
/// default when absent. An empty query returns `T::default()`.
///
/// ```rust
/// use serde::Deserialize;
///
/// #[derive(Default, Deserialize)]
/// struct Where {
///     #[serde(default)]
///     action: Vec<String>,
/// }
///
/// #[derive(Default, Deserialize)]
/// struct Filter {
///     #[serde(default, rename = "where")]
///     where_clause: Where,
///     #[serde(default)]
///     skip: i64,
/// }
///
/// let filter: Filter = querystring_filter::parse_as("action=a,b&skip=5").unwrap();
/// assert_eq!(filter.where_clause.action, ["a", "b"]);
/// assert_eq!(filter.skip, 5);
/// ```
///
/// # Errors
///
/// Everything [`parse_into`] returns, plus [`ParseError::Projection`] when
/// the parsed values do not fit `T`.
pub fn parse_as<T>(query: &str) -> Result<T, ParseError>
where
    T: DeserializeOwned + Default,
{
    if query.is_empty() {
        return Ok(T::default());
    }

    let spec = parse(query)?;
    let value = serde_json::to_value(spec)?;
    Ok(serde_json::from_value(value)?)
}
