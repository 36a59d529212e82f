//! Content views - produce the HTML injected into the main container.
//!
//! Views never fail: every error path resolves to a fallback fragment.

mod home;
mod index;
mod post;

use std::sync::Arc;
use thiserror::Error;

use crate::config::{IndexConfig, SiteConfig};
use crate::content::{Catalog, Fetch, FetchError, MarkdownRenderer, PostMeta};
use crate::engine::IndexQuery;
use crate::router::Route;

pub use index::{results_html, toggle_label};

/// Element holding the index results
pub const RESULTS_ID: &str = "timeline-container";
/// Search box of the index view
pub const SEARCH_ID: &str = "post-search";
/// Sort order toggle button
pub const SORT_TOGGLE_ID: &str = "sort-toggle";
/// Wrapper of the index embedded in the home view
pub const HOME_INDEX_ID: &str = "home-index";

/// Errors raised while loading a single post
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("post not found: {0}")]
    PostNotFound(String),

    #[error("could not fetch post: {0}")]
    Fetch(#[from] FetchError),
}

/// Shared view context: configuration, catalog, data store and renderer
pub struct Views {
    config: SiteConfig,
    catalog: Catalog,
    fetcher: Arc<dyn Fetch>,
    renderer: MarkdownRenderer,
}

impl Views {
    pub fn new(config: SiteConfig, fetcher: Arc<dyn Fetch>) -> Self {
        let catalog = Catalog::new(fetcher.clone(), &config.catalog_path);
        Self {
            config,
            catalog,
            fetcher,
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Markup shown synchronously while the view loads
    pub fn placeholder(&self, route: &Route) -> String {
        match route {
            Route::Home => home::page(&self.config, &self.index_placeholder(self.config.index)),
            Route::Index(index) => self.index_placeholder(*index),
            Route::Post(_) => post::placeholder(),
        }
    }

    /// Fully rendered view
    pub async fn render(&self, route: &Route) -> String {
        match route {
            Route::Home => {
                let index = self.render_index(self.config.index).await;
                home::page(&self.config, &index)
            }
            Route::Index(index) => self.render_index(*index).await,
            Route::Post(slug) => self.render_post(slug).await,
        }
    }

    /// Index markup for the given query against the cached catalog
    pub fn index_markup(&self, index: IndexConfig, query: &IndexQuery) -> String {
        let catalog = self.catalog.cached();
        index::page(&self.config, index, query, catalog.as_deref())
    }

    fn index_placeholder(&self, index: IndexConfig) -> String {
        index::page(&self.config, index, &IndexQuery::new(index.grouping), None)
    }

    async fn render_index(&self, index: IndexConfig) -> String {
        self.catalog.get().await;
        self.index_markup(index, &IndexQuery::new(index.grouping))
    }

    async fn render_post(&self, slug: &str) -> String {
        match self.load_post(slug).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Could not load post {}: {}", slug, e);
                post::error(&self.config)
            }
        }
    }

    async fn load_post(&self, slug: &str) -> Result<String, ViewError> {
        let path = self.config.post_body_path(slug);
        let (meta, body) = tokio::join!(self.catalog.find(slug), self.fetcher.fetch_text(&path));

        let markdown = body.map_err(|e| {
            if e.is_not_found() {
                ViewError::PostNotFound(slug.to_string())
            } else {
                ViewError::Fetch(e)
            }
        })?;

        let body_html = self.renderer.render(&markdown);
        Ok(post::article(&self.config, slug, meta.as_ref(), &body_html))
    }
}

/// Card metadata line shared by the index variants
pub(crate) fn read_time<'a>(config: &'a SiteConfig, post: &'a PostMeta) -> &'a str {
    post.read_time_or(&config.default_read_time)
}
