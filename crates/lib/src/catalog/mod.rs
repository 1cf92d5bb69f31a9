//! The keyword-to-category table and the matcher that reads it.
//!
//! A [`Catalog`] is loaded once at startup, either the [`Catalog::builtin`]
//! table or a JSON file, and shared read-only by every request.

mod builtin;
pub mod errors;
pub mod matcher;
pub mod types;

pub use errors::CatalogError;
pub use matcher::{QueryResponse, TopicMatcher, video_search_url};
pub use types::{Catalog, Category, Tool};
