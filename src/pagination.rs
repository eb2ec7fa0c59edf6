use crate::models::FilterSpec;

/// Offset/limit window resolved from `limit`, `skip`, `page` and `pageSize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip.
    pub offset: u64,
    /// Maximum rows to return; `None` means unbounded.
    pub limit: Option<u64>,
}

fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

impl Pagination {
    /// Resolve the window a data layer should apply.
    ///
    /// - `limit > 0`: `skip` rows are skipped and at most `limit` returned.
    /// - otherwise `pageSize > 0`: pages are 1-based, so `page=2&pageSize=20`
    ///   is rows 20..40. A `page` below 1 reads as the first page.
    /// - otherwise only `skip` applies and the result is unbounded.
    ///
    /// Negative values count as zero.
    #[must_use]
    pub fn from_spec(spec: &FilterSpec) -> Self {
        if spec.limit > 0 {
            Self {
                offset: non_negative(spec.skip),
                limit: Some(non_negative(spec.limit)),
            }
        } else if spec.page_size > 0 {
            let per_page = non_negative(spec.page_size);
            let page = non_negative(spec.page).max(1);
            Self {
                offset: (page - 1).saturating_mul(per_page),
                limit: Some(per_page),
            }
        } else {
            Self {
                offset: non_negative(spec.skip),
                limit: None,
            }
        }
    }

    /// Index of the last row the window covers out of `total_count` rows.
    ///
    /// `None` when the window starts at or past the end of the collection,
    /// which includes every window over an empty one.
    #[must_use]
    pub fn last_index(&self, total_count: u64) -> Option<u64> {
        if self.offset >= total_count || self.limit == Some(0) {
            return None;
        }
        let last_row = total_count - 1;
        Some(match self.limit {
            Some(limit) => self.offset.saturating_add(limit - 1).min(last_row),
            None => last_row,
        })
    }
}

impl From<&FilterSpec> for Pagination {
    fn from(spec: &FilterSpec) -> Self {
        Self::from_spec(spec)
    }
}

/// Drop characters that cannot appear in an HTTP header value.
#[cfg(feature = "axum")]
fn sanitize_resource_name(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()).collect()
}

/// Build a `Content-Range` header describing the window that was served.
///
/// ```text
/// Content-Range: users 20-39/135
/// ```
///
/// A window that covers no rows renders as `users */135`.
///
/// Control characters are stripped from `resource_name` first, so the header
/// is always valid.
#[cfg(feature = "axum")]
#[must_use]
pub fn calculate_content_range(
    pagination: Pagination,
    total_count: u64,
    resource_name: &str,
) -> axum::http::HeaderMap {
    use axum::http::{HeaderMap, HeaderValue, header::CONTENT_RANGE};

    let safe_name = sanitize_resource_name(resource_name);
    let range = match pagination.last_index(total_count) {
        Some(end) => format!("{}-{end}", pagination.offset),
        None => "*".to_string(),
    };

    let mut headers = HeaderMap::new();
    let content_range = format!("{safe_name} {range}/{total_count}");
    match HeaderValue::from_str(&content_range) {
        Ok(value) => {
            headers.insert(CONTENT_RANGE, value);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not build Content-Range header");
        }
    }
    headers
}
