//! Book catalog for shiori.
//!
//! Turns loosely structured spreadsheet rows into a [`Catalog`] of well-formed [`Book`]
//! records. Every record has all four fields, and titles are unique.

#![warn(missing_docs)]

mod book;
mod error;
mod normalize;
mod source;
mod store;

pub use book::{Book, Catalog};
pub use error::CatalogError;
pub use normalize::{NormalizeReport, RawRow, clean_header, normalize_rows};
pub use source::{load_catalog, load_catalog_or_empty, load_catalog_with_report, parse_rows};
pub use store::CatalogStore;
