//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&size=&sort=`).
///
/// Used by every listing handler. Page and size are clamped via
/// `PageSpec::new`; `sort` is `property[,asc|desc]` checked against the
/// entity's sortable-column whitelist.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}
