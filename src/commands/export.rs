//! Static export: per-page copies of the app shell with page metadata
//!
//! Crawlers and link previews do not run the client-side router, so every
//! post and core page gets its own `index.html` whose title, description and
//! canonical URL are stamped into the shell by plain text substitution.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::{AddressScheme, SiteConfig};
use crate::content::PostMeta;
use crate::helpers::{full_url_for, html_escape, route_href};
use crate::Folio;

/// Metadata stamped into one exported page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Output directory, relative to the public dir
    pub dir: String,
    pub title: String,
    pub og_title: String,
    pub description: String,
    pub url: String,
}

impl PageMeta {
    pub fn for_post(config: &SiteConfig, post: &PostMeta) -> Self {
        let description = if post.excerpt.trim().is_empty() {
            post.title.clone()
        } else {
            post.excerpt.clone()
        };
        Self {
            dir: format!("post/{}", post.slug),
            title: format!("{} | {}", post.title, config.author),
            og_title: post.title.clone(),
            description,
            url: page_url(config, "post", Some(&post.slug)),
        }
    }

    /// The `home` and `posts` entry pages
    pub fn core_pages(config: &SiteConfig) -> Vec<Self> {
        let page = |name: &str, title: &str, description: String| {
            let title = format!("{} | {}", title, config.author);
            Self {
                dir: name.to_string(),
                og_title: title.clone(),
                title,
                description,
                url: page_url(config, name, None),
            }
        };
        vec![
            page("home", "Home", config.description.clone()),
            page(
                "posts",
                "Posts",
                format!("Latest thoughts and writings by {}", config.author),
            ),
        ]
    }
}

/// Canonical URLs always use path addressing; exported pages live at paths
fn page_url(config: &SiteConfig, name: &str, arg: Option<&str>) -> String {
    full_url_for(&config.url, &route_href(AddressScheme::Path, name, arg))
}

/// Substitute the site-wide metadata of `shell` with the page's own
pub fn stamp(shell: &str, config: &SiteConfig, page: &PageMeta) -> String {
    let site_title = html_escape(&config.title);
    let site_description = html_escape(&config.description);
    let site_url = html_escape(&full_url_for(&config.url, ""));

    shell
        .replace(
            &format!("<title>{}</title>", site_title),
            &format!("<title>{}</title>", html_escape(&page.title)),
        )
        .replace(
            &format!(r#"content="{}""#, site_title),
            &format!(r#"content="{}""#, html_escape(&page.og_title)),
        )
        .replace(
            &format!(r#"content="{}""#, site_description),
            &format!(r#"content="{}""#, html_escape(&page.description)),
        )
        .replace(
            &format!(r#"content="{}""#, site_url),
            &format!(r#"content="{}""#, html_escape(&page.url)),
        )
        .replace(
            &format!(r#"href="{}""#, site_url),
            &format!(r#"href="{}""#, html_escape(&page.url)),
        )
}

/// Write every page; returns the number of pages written
pub fn run(folio: &Folio) -> Result<usize> {
    let config = &folio.config;
    let shell_path = folio.data_path(&config.shell);
    let shell = fs::read_to_string(&shell_path)
        .with_context(|| format!("Cannot read app shell {:?}", shell_path))?;
    let posts = super::read_catalog(folio)?;

    let mut pages: Vec<PageMeta> = posts
        .iter()
        .map(|post| PageMeta::for_post(config, post))
        .collect();
    pages.extend(PageMeta::core_pages(config));

    let mut written = 0;
    for page in &pages {
        let Some(path) = page_path(folio, &page.dir) else {
            tracing::warn!("Skipping page outside the output directory: {}", page.dir);
            continue;
        };
        tracing::info!("Generating page for: {}", page.og_title);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, stamp(&shell, config, page))?;
        tracing::debug!("Wrote {:?}", path);
        written += 1;
    }

    Ok(written)
}

/// Output file of a page, `None` when `dir` would leave `public_dir`
pub(crate) fn page_path(folio: &Folio, dir: &str) -> Option<PathBuf> {
    let relative = Path::new(dir);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(folio.public_dir.join(relative).join("index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::{init_site, shell_html};
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        SiteConfig {
            title: "My Space".to_string(),
            description: "Blog & notes".to_string(),
            author: "Ada".to_string(),
            url: "https://blog.example.com/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_stamp_post_page() {
        let config = config();
        let shell = shell_html(&config);
        let post = PostMeta::new("a-b", "Tips \"&\" Tricks", "2024-01-01").with_excerpt("Short");
        let html = stamp(&shell, &config, &PageMeta::for_post(&config, &post));

        assert!(html.contains("<title>Tips &quot;&amp;&quot; Tricks | Ada</title>"));
        assert!(html.contains(r#"<meta property="og:title" content="Tips &quot;&amp;&quot; Tricks">"#));
        assert!(html.contains(r#"<meta name="description" content="Short">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://blog.example.com/post/a-b">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://blog.example.com/post/a-b">"#));
        assert!(!html.contains("Blog &amp; notes"));
    }

    #[test]
    fn test_description_falls_back_to_title() {
        let config = config();
        let post = PostMeta::new("a", "Alpha", "2024-01-01");
        assert_eq!(PageMeta::for_post(&config, &post).description, "Alpha");
    }

    #[test]
    fn test_core_pages() {
        let pages = PageMeta::core_pages(&config());
        assert_eq!(pages[0].dir, "home");
        assert_eq!(pages[0].og_title, "Home | Ada");
        assert_eq!(pages[0].url, "https://blog.example.com/home");
        assert_eq!(pages[1].description, "Latest thoughts and writings by Ada");
    }

    #[test]
    fn test_export_writes_one_page_per_slug() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        crate::commands::new::create_post(
            &folio,
            crate::commands::new::NewPost {
                title: "Second".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(folio.export().unwrap(), 4);
        let page = fs::read_to_string(dir.path().join("post/second/index.html")).unwrap();
        assert!(page.contains("<title>Second | John Doe</title>"));
        assert!(dir.path().join("post/hello-world/index.html").exists());
        assert!(dir.path().join("home/index.html").exists());
        assert!(dir.path().join("posts/index.html").exists());
    }

    #[test]
    fn test_export_skips_escaping_slugs() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site");
        init_site(&site).unwrap();
        let folio = Folio::new(&site).unwrap();

        let mut posts = crate::commands::read_catalog(&folio).unwrap();
        posts.push(PostMeta::new("../../x", "Escape", "2024-01-01"));
        posts.push(PostMeta::new("..", "Parent", "2024-01-01"));
        crate::commands::write_catalog(&folio, &posts).unwrap();

        assert_eq!(folio.export().unwrap(), 3);
        assert!(!dir.path().join("x").exists());
        assert!(!dir.path().join("x/index.html").exists());
        assert!(site.join("post/hello-world/index.html").exists());

        assert_eq!(page_path(&folio, "post/.."), None);
        assert_eq!(
            page_path(&folio, "post/a"),
            Some(site.join("post/a/index.html"))
        );
    }
}
