//! folio-rs: content pipeline of a client-rendered personal blog
//!
//! The crate loads a catalog of post metadata and markdown post bodies,
//! filters/sorts/groups the catalog and renders home, index and post views
//! into a document driven by URL-based navigation. Hosts plug in through the
//! [`dom::Document`], [`content::Fetch`] and [`theme::Storage`] traits.

pub mod commands;
pub mod config;
pub mod content;
pub mod dom;
pub mod engine;
pub mod helpers;
pub mod router;
pub mod server;
pub mod theme;
pub mod views;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::{DirFetcher, Fetch};

/// The main application: a site directory and its configuration
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Site root, the directory the app shell and data are served from
    pub base_dir: PathBuf,
    /// Output directory of static export
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Path of a site-relative data file
    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }

    /// Fetcher reading data files from the site root
    pub fn fetcher(&self) -> Arc<dyn Fetch> {
        Arc::new(DirFetcher::new(&self.base_dir))
    }

    /// Export static post pages
    pub fn export(&self) -> Result<usize> {
        commands::export::run(self)
    }

    /// Remove exported pages
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
