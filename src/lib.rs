//! # querystring-filter
//!
//! Turn raw URL query strings into a structured filter that a data-access
//! layer can apply: equality/membership constraints (`where`), sort keys
//! (`order`), grouping (`group`) and pagination (`limit`, `skip`, `page`,
//! `pageSize`).
//!
//! ```rust
//! use querystring_filter::{OrderEntry, parse};
//!
//! let spec = parse(
//!     "action=test,example&order=action,category&group=action&limit=10&skip=5",
//! )
//! .unwrap();
//!
//! assert_eq!(spec.where_clause["action"], ["test", "example"]);
//! assert_eq!(
//!     spec.order,
//!     [OrderEntry::new("action", "desc"), OrderEntry::new("category", "desc")]
//! );
//! assert_eq!(spec.group, ["action"]);
//! assert_eq!((spec.limit, spec.skip, spec.page, spec.page_size), (10, 5, 0, 0));
//! ```
//!
//! ## Output shapes
//!
//! - [`parse`] returns a [`FilterSpec`].
//! - [`parse_into`] writes into any [`FilterTarget`], which only has to
//!   implement the setters for the fields it cares about.
//! - [`parse_as`] projects the result onto any `serde` deserializable struct.
//!
//! ## Features
//!
//! - `axum` (default): [`QueryFilter`] extractor, `IntoResponse` for
//!   [`ParseError`], and [`pagination::calculate_content_range`].
//! - `sea-orm` (default): [`filter::apply_filter`] and friends.
//!
//! ## Logging
//!
//! Parsing emits `tracing` events at `trace`/`debug` level. Install a
//! subscriber in your application to see them:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt()
//!     .with_target(false)
//!     .compact()
//!     .init();
//! ```

pub mod decode;
pub mod errors;
#[cfg(feature = "axum")]
pub mod extract;
#[cfg(feature = "sea-orm")]
pub mod filter;
pub mod models;
pub mod pagination;
pub mod query_parser;
pub mod sort;
pub mod traits;

pub use errors::ParseError;
#[cfg(feature = "axum")]
pub use extract::QueryFilter;
#[cfg(feature = "sea-orm")]
pub use filter::apply_filter;
pub use models::{FilterSpec, Group, Limit, Order, OrderEntry, Page, PageSize, Skip, Where};
pub use pagination::Pagination;
pub use query_parser::{is_reserved, parse, parse_as, parse_into};
pub use sort::DEFAULT_DIRECTION;
pub use traits::FilterTarget;
