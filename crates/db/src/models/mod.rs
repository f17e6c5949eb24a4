//! Entity models and their payload DTOs.
//!
//! Each entity module carries three things: the row struct returned by
//! queries, a payload struct deserialized from request bodies (every field
//! optional, id included), and a `validate` function returning the
//! payload's field-level violations.

pub mod product;
pub mod registry;
pub mod section;
