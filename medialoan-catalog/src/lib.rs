//! Catalog loading, lookup, and rental state for the media library.
//!
//! The loader parses the pipe-delimited inventory file into
//! [`ContentItem`](medialoan_core::ContentItem)s; the
//! [`CatalogManager`] owns the resulting inventory and serves all
//! lookups and borrow/return transitions; the export module dumps the
//! append-only availability summary.

pub mod error;
pub mod export;
pub mod loader;
pub mod manager;

pub use error::CatalogError;
pub use export::{append_summary_file, write_summary};
pub use loader::{load_catalog_file, parse_catalog, ParsedCatalog};
pub use manager::{BorrowOutcome, CatalogManager, ReturnOutcome};
