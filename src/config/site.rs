//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub intro: String,

    // URL
    pub url: String,
    pub addressing: AddressScheme,

    // Data
    pub catalog_path: String,
    pub posts_dir: String,
    pub public_dir: String,
    pub shell: String,

    // Writing
    pub default_read_time: String,

    // Rendering
    pub container_id: String,
    pub animation_class: String,
    #[serde(default)]
    pub index: IndexConfig,

    // Local server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Personal Space".to_string(),
            description: "Personal Website & Blog".to_string(),
            author: "John Doe".to_string(),
            intro: "This is where I share my thoughts, projects, and experiments. \
                    Check out my latest writing below."
                .to_string(),

            url: "http://example.com".to_string(),
            addressing: AddressScheme::Path,

            catalog_path: "data/posts.json".to_string(),
            posts_dir: "data/posts".to_string(),
            public_dir: ".".to_string(),
            shell: "index.html".to_string(),

            default_read_time: "5 min read".to_string(),

            container_id: "main-content".to_string(),
            animation_class: "fade-in".to_string(),
            index: IndexConfig::default(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Relative path of the markdown body for a slug
    pub fn post_body_path(&self, slug: &str) -> String {
        format!("{}/{}.md", self.posts_dir.trim_end_matches('/'), slug)
    }
}

/// How routes are encoded in the browser URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressScheme {
    /// `/route/arg`, needs the host to serve the shell on sub-paths
    #[default]
    Path,
    /// `#route/arg`
    Hash,
}

/// Grouping applied by the index view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Flat card list
    Flat,
    /// Year -> month timeline
    #[default]
    Timeline,
}

/// Index view configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub grouping: Grouping,
    pub sort_toggle: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            grouping: Grouping::Timeline,
            sort_toggle: true,
        }
    }
}

/// Local server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub ip: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            ip: "localhost".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.catalog_path, "data/posts.json");
        assert_eq!(config.addressing, AddressScheme::Path);
        assert_eq!(config.index.grouping, Grouping::Timeline);
        assert!(config.index.sort_toggle);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
addressing: hash
index:
  grouping: flat
  sort_toggle: false
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.addressing, AddressScheme::Hash);
        assert_eq!(config.index.grouping, Grouping::Flat);
        assert!(!config.index.sort_toggle);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.posts_dir, "data/posts");
    }

    #[test]
    fn test_post_body_path() {
        let mut config = SiteConfig::default();
        assert_eq!(config.post_body_path("hello"), "data/posts/hello.md");
        config.posts_dir = "content/".to_string();
        assert_eq!(config.post_body_path("hello"), "content/hello.md");
    }
}
