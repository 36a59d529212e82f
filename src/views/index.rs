//! Post index view: flat card list or year/month timeline

use crate::config::{Grouping, IndexConfig, SiteConfig};
use crate::content::PostMeta;
use crate::engine::{self, IndexQuery, Outcome, SortOrder, YearGroup};
use crate::helpers::{card_date, html_escape, link_to, loading, route_href};

use super::{read_time, RESULTS_ID, SEARCH_ID, SORT_TOGGLE_ID};

/// Index header, controls and results for `query`
pub(super) fn page(
    config: &SiteConfig,
    index: IndexConfig,
    query: &IndexQuery,
    catalog: Option<&[PostMeta]>,
) -> String {
    let heading = match index.grouping {
        Grouping::Timeline => "Timeline",
        Grouping::Flat => "Latest Posts",
    };
    let wrapper = match index.grouping {
        Grouping::Timeline => "timeline-wrapper",
        Grouping::Flat => "list-wrapper",
    };

    let toggle = if index.sort_toggle {
        format!(
            r#"
        <button type="button" id="{}" class="sort-toggle" data-sort="{}">{}</button>"#,
            SORT_TOGGLE_ID,
            query.sort.as_str(),
            toggle_label(query.sort)
        )
    } else {
        String::new()
    };

    let outcome = engine::run(catalog, query);

    format!(
        r#"<div class="posts-header fade-in">
    <h2>{}</h2>
    <div class="controls">
        <input type="text" id="{}" placeholder="Search posts..." class="search-input" value="{}">{}
    </div>
</div>
<div id="{}" class="{}">{}</div>"#,
        heading,
        SEARCH_ID,
        html_escape(&query.text),
        toggle,
        RESULTS_ID,
        wrapper,
        results_html(config, &outcome)
    )
}

/// Label of the sort toggle for the current order
pub fn toggle_label(sort: SortOrder) -> &'static str {
    sort.toggle_label()
}

/// Markup of the results region for one engine outcome
pub fn results_html(config: &SiteConfig, outcome: &Outcome) -> String {
    match outcome {
        Outcome::NotLoaded => loading("Loading..."),
        Outcome::NoResults => "<p>No posts found.</p>".to_string(),
        Outcome::Flat(posts) => {
            let cards: String = posts.iter().map(|p| list_card(config, p)).collect();
            format!(r#"<div class="blog-grid">{}</div>"#, cards)
        }
        Outcome::Timeline(years) => years.iter().map(|y| year_section(config, y)).collect(),
    }
}

fn post_href(config: &SiteConfig, post: &PostMeta) -> String {
    route_href(config.addressing, "post", Some(&post.slug))
}

fn list_card(config: &SiteConfig, post: &PostMeta) -> String {
    let href = post_href(config, post);
    format!(
        r#"
<article class="blog-card fade-in">
    <h3>{}</h3>
    <div class="meta">{} &middot; {}</div>
    <p>{}</p>
    {}
</article>"#,
        link_to(&href, &html_escape(&post.title), None),
        html_escape(&post.date),
        html_escape(read_time(config, post)),
        html_escape(&post.excerpt),
        link_to(&href, "Read more &rarr;", Some("read-more"))
    )
}

fn year_section(config: &SiteConfig, year: &YearGroup) -> String {
    let mut html = format!(
        r#"<div class="timeline-year">
    <h2 class="year-header">{}</h2>"#,
        year.label()
    );

    for month in &year.months {
        html.push_str(&format!(
            r#"<div class="timeline-month">
        <h3 class="month-header">{}</h3>
        <div class="month-posts">"#,
            month.label()
        ));
        for post in &month.posts {
            html.push_str(&timeline_card(config, post));
        }
        html.push_str("</div></div>");
    }

    html.push_str("</div>");
    html
}

fn timeline_card(config: &SiteConfig, post: &PostMeta) -> String {
    let href = post_href(config, post);
    let date = post
        .parsed_date()
        .map(|d| card_date(&d))
        .unwrap_or_else(|| html_escape(&post.date));
    format!(
        r#"
<article class="blog-card timeline-card fade-in">
    <div class="card-date">{}</div>
    <h3>{}</h3>
    <div class="meta">{}</div>
    <p>{}</p>
    {}
</article>"#,
        date,
        link_to(&href, &html_escape(&post.title), None),
        html_escape(read_time(config, post)),
        html_escape(&post.excerpt),
        link_to(&href, "Read &rarr;", Some("read-more"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<PostMeta> {
        vec![
            PostMeta::new("a", "Alpha", "2024-01-01").with_excerpt("First"),
            PostMeta::new("b", "Beta <3", "2024-06-01").with_excerpt("Second"),
        ]
    }

    #[test]
    fn test_timeline_page() {
        let config = SiteConfig::default();
        let catalog = catalog();
        let query = IndexQuery::new(Grouping::Timeline);
        let html = page(&config, IndexConfig::default(), &query, Some(&catalog[..]));

        assert!(html.contains("<h2>Timeline</h2>"));
        assert!(html.contains(r#"<h2 class="year-header">2024</h2>"#));
        assert!(html.contains(r#"<div class="card-date">June 1</div>"#));
        assert!(html.contains(r#"<a href="/post/b">Beta &lt;3</a>"#));
        assert!(html.contains(r#"data-sort="newest">Oldest first</button>"#));
        assert!(html.find("June").unwrap() < html.find("January").unwrap());
        assert!(html.contains("5 min read"));
    }

    #[test]
    fn test_flat_page_without_toggle() {
        let config = SiteConfig::default();
        let catalog = catalog();
        let index = IndexConfig {
            grouping: Grouping::Flat,
            sort_toggle: false,
        };
        let query = IndexQuery::new(Grouping::Flat);
        let html = page(&config, index, &query, Some(&catalog[..]));

        assert!(html.contains("<h2>Latest Posts</h2>"));
        assert!(html.contains(r#"<div class="meta">2024-06-01 &middot; 5 min read</div>"#));
        assert!(!html.contains(SORT_TOGGLE_ID));
        assert!(html.find("Beta").unwrap() < html.find("Alpha").unwrap());
    }

    #[test]
    fn test_hash_addressing_links() {
        let config = SiteConfig {
            addressing: crate::config::AddressScheme::Hash,
            ..SiteConfig::default()
        };
        let catalog = catalog();
        let outcome = engine::run(Some(&catalog[..]), &IndexQuery::new(Grouping::Flat));
        assert!(results_html(&config, &outcome).contains(r##"href="#post/a""##));
    }

    #[test]
    fn test_query_value_is_escaped() {
        let config = SiteConfig::default();
        let query = IndexQuery {
            text: r#""><script>"#.to_string(),
            ..IndexQuery::default()
        };
        let html = page(&config, IndexConfig::default(), &query, Some(&[][..]));
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
        assert!(html.contains("<p>No posts found.</p>"));
    }

    #[test]
    fn test_not_loaded_shows_loading() {
        let config = SiteConfig::default();
        assert_eq!(
            results_html(&config, &Outcome::NotLoaded),
            r#"<div class="loading">Loading...</div>"#
        );
    }
}
