//! Access to the static data store (catalog JSON and markdown bodies)

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use crate::helpers::encode_segment;

/// Errors raised while fetching from the data store
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GET {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether the store answered "no such document"
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

/// A source of text documents addressed by relative path
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET a document; non-success responses are errors
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetches documents over HTTP relative to a base URL
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    /// Create a fetcher for a site root such as `https://example.com/`
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder()
            .user_agent(concat!("folio-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    /// Resolve a store path against the base; each segment is
    /// percent-encoded so `#` or `?` in a slug stay part of the path
    fn url(&self, path: &str) -> Result<Url, FetchError> {
        let encoded = path
            .trim_start_matches('/')
            .split('/')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/");
        self.base
            .join(&encoded)
            .map_err(|e| FetchError::InvalidPath(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url(path)?;
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}

/// Serves documents from a local directory, mapping missing files to 404
#[derive(Clone, Debug)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl Fetch for DirFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        match tokio::fs::read_to_string(&file).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FetchError::Status {
                path: path.to_string(),
                status: 404,
            }),
            Err(e) => Err(FetchError::Io(e)),
        }
    }
}
