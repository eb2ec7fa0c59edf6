use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::ParseError;
use crate::models::FilterSpec;
use crate::query_parser::parse_into;
use crate::traits::FilterTarget;

/// Axum extractor that parses the request's query string.
///
/// Defaults to [`FilterSpec`]; any [`FilterTarget`] with a `Default` works.
/// A bad query string rejects the request with `400 Bad Request`.
///
/// ```rust,ignore
/// use querystring_filter::{FilterSpec, Pagination, QueryFilter};
///
/// async fn list_todos(QueryFilter(filter): QueryFilter) -> String {
///     let window = Pagination::from_spec(&filter);
///     format!("offset {} / {:?} fields", window.offset, filter.where_clause.keys())
/// }
///
/// let app = axum::Router::new().route("/todos", axum::routing::get(list_todos));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryFilter<T = FilterSpec>(pub T);

impl<T, S> FromRequestParts<S> for QueryFilter<T>
where
    T: FilterTarget + Default + Send,
    S: Send + Sync,
{
    type Rejection = ParseError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let mut target = T::default();
        parse_into(query, &mut target)?;
        Ok(Self(target))
    }
}

impl<T> std::ops::Deref for QueryFilter<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
