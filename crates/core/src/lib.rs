//! Domain-level types shared by the persistence and HTTP layers.
//!
//! This crate has no internal dependencies so it can be used by both the
//! repository layer and any future CLI or worker tooling.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
