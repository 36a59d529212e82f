//! Single post view

use crate::config::SiteConfig;
use crate::content::PostMeta;
use crate::helpers::{html_escape, link_to, loading, route_href};

use super::read_time;

pub(super) fn placeholder() -> String {
    loading("Loading post...")
}

/// Rendered post. Title falls back to the slug and the meta line is omitted
/// when the catalog has no entry for it.
pub(super) fn article(
    config: &SiteConfig,
    slug: &str,
    meta: Option<&PostMeta>,
    body_html: &str,
) -> String {
    let title = meta.map(|m| m.title.as_str()).unwrap_or(slug);
    let meta_line = meta
        .map(|m| {
            format!(
                r#"
        <div class="meta">{} &middot; {}</div>"#,
                html_escape(&m.date),
                html_escape(read_time(config, m))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="blog-post fade-in">
    {}
    <header class="post-header">
        <h1>{}</h1>{}
    </header>
    <div class="markdown-content">
{}
    </div>
</article>"#,
        link_to(&index_href(config), "&larr; Back to Posts", Some("back-link")),
        html_escape(title),
        meta_line,
        body_html
    )
}

/// Fallback shown when the body could not be fetched
pub(super) fn error(config: &SiteConfig) -> String {
    format!(
        r#"<h2>Error</h2>
<p>Could not load post. {}</p>"#,
        link_to(&index_href(config), "Go back", None)
    )
}

fn index_href(config: &SiteConfig) -> String {
    route_href(config.addressing, "posts", None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AddressScheme;

    #[test]
    fn test_article_with_meta() {
        let config = SiteConfig::default();
        let meta = PostMeta::new("a", "Alpha & Omega", "2024-01-01");
        let html = article(&config, "a", Some(&meta), "<p>body</p>");
        assert!(html.contains("<h1>Alpha &amp; Omega</h1>"));
        assert!(html.contains(r#"<div class="meta">2024-01-01 &middot; 5 min read</div>"#));
        assert!(html.contains(r#"<a href="/posts" class="back-link">&larr; Back to Posts</a>"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_error_links_back_to_index() {
        let config = SiteConfig {
            addressing: AddressScheme::Hash,
            ..SiteConfig::default()
        };
        assert!(error(&config).contains(r##"<a href="#posts">Go back</a>"##));
    }
}
