//! Post catalog loader - fetches `posts.json` once per session

use std::sync::Arc;
use tokio::sync::OnceCell;

use super::fetch::{Fetch, FetchError};
use super::PostMeta;

/// Load state of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    NotLoaded,
    Loaded,
}

/// Explicitly owned catalog cache.
///
/// The first [`Catalog::get`] performs the fetch; every later call returns the
/// cached sequence. A failed load is cached as an empty catalog, like a
/// successful one, until [`Catalog::reset`] (a full page reload).
pub struct Catalog {
    fetcher: Arc<dyn Fetch>,
    path: String,
    posts: OnceCell<Arc<[PostMeta]>>,
}

impl Catalog {
    /// Create a catalog that will load from `path` through `fetcher`
    pub fn new(fetcher: Arc<dyn Fetch>, path: &str) -> Self {
        Self {
            fetcher,
            path: path.to_string(),
            posts: OnceCell::new(),
        }
    }

    /// Get the catalog, fetching it on first use
    pub async fn get(&self) -> Arc<[PostMeta]> {
        self.posts
            .get_or_init(|| async {
                match self.fetch().await {
                    Ok(posts) => {
                        tracing::info!("Loaded {} posts from {}", posts.len(), self.path);
                        posts.into()
                    }
                    Err(e) => {
                        tracing::error!("Failed to load posts: {}", e);
                        Vec::new().into()
                    }
                }
            })
            .await
            .clone()
    }

    /// The cached catalog, without triggering a fetch
    pub fn cached(&self) -> Option<Arc<[PostMeta]>> {
        self.posts.get().cloned()
    }

    pub fn state(&self) -> CatalogState {
        if self.posts.initialized() {
            CatalogState::Loaded
        } else {
            CatalogState::NotLoaded
        }
    }

    /// Look up one entry by slug, loading the catalog if needed
    pub async fn find(&self, slug: &str) -> Option<PostMeta> {
        self.get().await.iter().find(|p| p.slug == slug).cloned()
    }

    /// Drop the cached catalog
    pub fn reset(&mut self) {
        self.posts.take();
    }

    async fn fetch(&self) -> Result<Vec<PostMeta>, FetchError> {
        let text = self.fetcher.fetch_text(&self.path).await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
