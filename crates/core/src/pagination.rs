//! Page spec, sort parsing, and pagination-header math.
//!
//! Listing endpoints take `?page=&size=&sort=` and answer with an
//! `X-Total-Count` header plus RFC 5988 `Link` relations. The header
//! rendering lives in the API crate; the arithmetic and the sort-column
//! whitelist check live here so the repository layer can share them.

use crate::error::CoreError;

/// Default number of entities per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of entities per page.
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated sort order. `column` is always taken from a per-entity
/// whitelist, never from raw user input, so it is safe to splice into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub direction: SortDirection,
}

/// Page number, page size, and sort order for a listing query.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub page: i64,
    pub size: i64,
    pub sort: Sort,
}

impl PageSpec {
    /// Build a spec from raw query parameters, clamping page and size.
    pub fn new(page: Option<i64>, size: Option<i64>, sort: Sort) -> Self {
        Self {
            page: clamp_page(page),
            size: clamp_size(size),
            sort,
        }
    }

    /// Row offset of the first entity on this page.
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

/// Clamp a user-provided page number to non-negative. Defaults to 0.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(0).max(0)
}

/// Clamp a user-provided page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_size(size: Option<i64>) -> i64 {
    size.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

/// Parse a `property[,asc|desc]` sort parameter against a whitelist of
/// `(json property, sql column)` pairs.
///
/// `None` falls back to the first whitelist entry ascending, which every
/// entity lists as `id`. Unknown properties and directions are rejected
/// rather than passed through to SQL.
pub fn parse_sort(
    raw: Option<&str>,
    allowed: &[(&'static str, &'static str)],
) -> Result<Sort, CoreError> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Ok(Sort {
                column: allowed[0].1,
                direction: SortDirection::Asc,
            })
        }
    };

    let mut parts = raw.splitn(2, ',');
    let property = parts.next().unwrap_or("").trim();
    let direction = match parts.next().map(str::trim) {
        None | Some("asc") => SortDirection::Asc,
        Some("desc") => SortDirection::Desc,
        Some(other) => {
            return Err(CoreError::Validation(format!(
                "Invalid sort direction: {other}"
            )))
        }
    };

    let column = allowed
        .iter()
        .find(|(prop, _)| *prop == property)
        .map(|(_, col)| *col)
        .ok_or_else(|| CoreError::Validation(format!("Unknown sort property: {property}")))?;

    Ok(Sort { column, direction })
}

/// Number of pages needed to hold `total` entities, `size` per page.
pub fn total_pages(total: i64, size: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + size - 1) / size
    }
}

/// Pagination link relations for the `Link` response header.
///
/// Returns `(rel, page)` pairs: `next` when a later page exists, `prev`
/// when an earlier one does, and `last`/`first` always.
pub fn page_links(page: i64, size: i64, total: i64) -> Vec<(&'static str, i64)> {
    let pages = total_pages(total, size);
    let mut links = Vec::with_capacity(4);
    if page + 1 < pages {
        links.push(("next", page + 1));
    }
    if page > 0 {
        links.push(("prev", page - 1));
    }
    links.push(("last", (pages - 1).max(0)));
    links.push(("first", 0));
    links
}
