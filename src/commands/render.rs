//! Headless rendering of one location

use anyhow::Result;
use std::sync::Arc;

use crate::content::{Fetch, HttpFetcher};
use crate::dom::{Document, MemoryDocument};
use crate::helpers::{full_url_for, route_href};
use crate::router::Router;
use crate::views::Views;
use crate::Folio;

/// Navigate a fresh in-memory document to `location` and return the
/// final (possibly normalized) URL along with the container HTML
pub async fn render_location(
    folio: &Folio,
    fetcher: Arc<dyn Fetch>,
    location: &str,
) -> Result<(String, String)> {
    let config = &folio.config;
    let url = full_url_for(&config.url, location);
    let home = route_href(config.addressing, "home", None);
    let posts = route_href(config.addressing, "posts", None);
    let document = MemoryDocument::new(&url)?
        .with_container(&config.container_id)
        .with_nav_links(&[home.as_str(), posts.as_str()]);

    let views = Views::new(config.clone(), fetcher);
    let mut router = Router::new(document, Arc::new(views));
    let route = router.start().await;
    tracing::debug!("Rendered {} as {:?}", location, route);

    let document = router.document();
    let html = document
        .inner_html(&config.container_id)
        .unwrap_or_default();
    Ok((document.location(), html))
}

/// Run the render command against the site directory, or a deployed site
/// when `remote` is given
pub async fn run(folio: &Folio, location: &str, remote: Option<&str>) -> Result<()> {
    let fetcher: Arc<dyn Fetch> = match remote {
        Some(base) => Arc::new(HttpFetcher::new(base)?),
        None => folio.fetcher(),
    };
    let (url, html) = render_location(folio, fetcher, location).await?;
    tracing::info!("Rendered {}", url);
    println!("{}", html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_render_scaffolded_site() {
        let dir = TempDir::new().unwrap();
        super::super::init::init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let (url, html) = render_location(&folio, folio.fetcher(), "/").await.unwrap();
        assert_eq!(url, "http://example.com/home");
        assert!(html.contains("Welcome to My Personal Space"));
        assert!(html.contains("Hello World"));

        let (_, html) = render_location(&folio, folio.fetcher(), "/post/hello-world")
            .await
            .unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("Quick Start"));
        assert!(html.contains("1 min read"));

        let (_, html) = render_location(&folio, folio.fetcher(), "/post/nope")
            .await
            .unwrap();
        assert!(html.contains("Could not load post."));
    }

    #[tokio::test]
    async fn test_render_slug_with_reserved_chars() {
        let dir = TempDir::new().unwrap();
        super::super::init::init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let post = super::super::new::NewPost {
            title: "C# Tips".to_string(),
            slug: Some("c#-tips".to_string()),
            ..Default::default()
        };
        super::super::new::create_post(&folio, post).unwrap();

        let (url, html) = render_location(&folio, folio.fetcher(), "/post/c%23-tips")
            .await
            .unwrap();
        assert_eq!(url, "http://example.com/post/c%23-tips");
        assert!(html.contains("<h1>C# Tips</h1>"));
        assert!(!html.contains("Could not load post."));
    }

    #[tokio::test]
    async fn test_render_remote_site() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/data/posts.json");
            then.status(200)
                .body(r#"[{"slug":"r","title":"Remote","date":"2023-03-03"}]"#);
        });
        server.mock(|when, then| {
            when.method(GET).path("/data/posts/r.md");
            then.status(200).body("Served *remotely*");
        });

        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let fetcher = Arc::new(HttpFetcher::new(&server.base_url()).unwrap());

        let (_, html) = render_location(&folio, fetcher, "/post/r").await.unwrap();
        assert!(html.contains("<h1>Remote</h1>"));
        assert!(html.contains("<em>remotely</em>"));
    }
}
