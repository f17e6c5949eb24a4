//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Listing methods take a
//! [`PageSpec`](inventory_core::pagination::PageSpec) whose sort column
//! comes from the repository's `SORTABLE_COLUMNS` whitelist.

pub mod product_repo;
pub mod registry_repo;
pub mod section_repo;

pub use product_repo::ProductRepo;
pub use registry_repo::RegistryRepo;
pub use section_repo::SectionRepo;
