//! Content module - post catalog, post bodies and markdown rendering

pub mod catalog;
pub mod fetch;
mod markdown;
mod post;

pub use catalog::{Catalog, CatalogState};
pub use fetch::{DirFetcher, Fetch, FetchError, HttpFetcher};
pub use markdown::MarkdownRenderer;
pub use post::PostMeta;
