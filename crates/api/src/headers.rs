//! Pagination response headers.
//!
//! Listing endpoints answer with `X-Total-Count` plus an RFC 5988 `Link`
//! header carrying next/prev/last/first page relations, computed from the
//! total count and the page spec.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, LINK};

use inventory_core::pagination::{page_links, PageSpec};

use crate::error::{AppError, AppResult};

static X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Build the pagination headers for a listing response.
///
/// `path` is the collection path (e.g. `/api/products`); page and size are
/// echoed into each link target.
pub fn pagination_headers(path: &str, page: &PageSpec, total: i64) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        X_TOTAL_COUNT.clone(),
        HeaderValue::from_str(&total.to_string())
            .map_err(|e| AppError::InternalError(format!("Invalid X-Total-Count header: {e}")))?,
    );

    let links: Vec<String> = page_links(page.page, page.size, total)
        .into_iter()
        .map(|(rel, target)| {
            format!("<{path}?page={target}&size={}>; rel=\"{rel}\"", page.size)
        })
        .collect();
    headers.insert(
        LINK,
        HeaderValue::from_str(&links.join(","))
            .map_err(|e| AppError::InternalError(format!("Invalid Link header: {e}")))?,
    );

    Ok(headers)
}
