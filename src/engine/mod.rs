//! Index/timeline engine - filters, sorts and groups the catalog.
//!
//! Everything here is pure: it takes a catalog snapshot and a query and
//! returns what the index view should render. The view re-runs it on every
//! keystroke and every sort toggle.

mod timeline;

use chrono::NaiveDateTime;
use std::cmp::Ordering;

use crate::config::Grouping;
use crate::content::PostMeta;

pub use timeline::{group_timeline, MonthGroup, YearGroup};

/// Sort direction for the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    /// Label of the toggle button, naming the order it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Oldest first",
            SortOrder::Oldest => "Newest first",
        }
    }
}

/// Live input of the index view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexQuery {
    pub text: String,
    pub sort: SortOrder,
    pub grouping: Grouping,
}

impl IndexQuery {
    pub fn new(grouping: Grouping) -> Self {
        Self {
            grouping,
            ..Default::default()
        }
    }
}

/// Result of one engine run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    /// The catalog has not been fetched yet
    NotLoaded,
    /// The catalog is loaded but nothing matches (or it is empty)
    NoResults,
    Flat(Vec<&'a PostMeta>),
    Timeline(Vec<YearGroup<'a>>),
}

impl<'a> Outcome<'a> {
    /// All posts in emitted order
    pub fn posts(&self) -> Vec<&'a PostMeta> {
        match self {
            Outcome::NotLoaded | Outcome::NoResults => Vec::new(),
            Outcome::Flat(posts) => posts.clone(),
            Outcome::Timeline(years) => years
                .iter()
                .flat_map(|y| y.months.iter())
                .flat_map(|m| m.posts.iter().copied())
                .collect(),
        }
    }
}

/// Run the full pipeline: filter, sort, then group when asked to
pub fn run<'a>(catalog: Option<&'a [PostMeta]>, query: &IndexQuery) -> Outcome<'a> {
    let Some(catalog) = catalog else {
        return Outcome::NotLoaded;
    };

    let filtered = filter(catalog, &query.text);
    if filtered.is_empty() {
        return Outcome::NoResults;
    }

    let sorted = sort(filtered, query.sort);
    match query.grouping {
        Grouping::Flat => Outcome::Flat(sorted),
        Grouping::Timeline => Outcome::Timeline(group_timeline(&sorted, query.sort)),
    }
}

/// Case-insensitive substring match against title or excerpt
pub fn filter<'a>(posts: &'a [PostMeta], text: &str) -> Vec<&'a PostMeta> {
    let needle = text.to_lowercase();
    posts.iter().filter(|p| p.matches(&needle)).collect()
}

/// Stable sort by publication instant. Undated posts go last in either
/// direction.
pub fn sort(posts: Vec<&PostMeta>, order: SortOrder) -> Vec<&PostMeta> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &PostMeta)> =
        posts.into_iter().map(|p| (p.sort_key(), p)).collect();

    keyed.sort_by(|(a, _), (b, _)| compare_dates(*a, *b, order));
    keyed.into_iter().map(|(_, p)| p).collect()
}

fn compare_dates(
    a: Option<NaiveDateTime>,
    b: Option<NaiveDateTime>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Newest => b.cmp(&a),
            SortOrder::Oldest => a.cmp(&b),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, date: &str, excerpt: &str) -> PostMeta {
        PostMeta::new(slug, title, date).with_excerpt(excerpt)
    }

    fn sample() -> Vec<PostMeta> {
        vec![
            post("a", "Alpha", "2024-01-01", "The first one"),
            post("b", "Beta", "2024-06-01", "The second one"),
        ]
    }

    fn slugs(posts: &[&PostMeta]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_newest_first() {
        let catalog = sample();
        let query = IndexQuery::new(Grouping::Flat);
        let outcome = run(Some(&catalog[..]), &query);
        assert_eq!(slugs(&outcome.posts()), vec!["b", "a"]);
    }

    #[test]
    fn test_oldest_first() {
        let catalog = sample();
        let query = IndexQuery {
            sort: SortOrder::Oldest,
            ..IndexQuery::new(Grouping::Flat)
        };
        assert_eq!(slugs(&run(Some(&catalog[..]), &query).posts()), vec!["a", "b"]);
    }

    #[test]
    fn test_query_filters_case_insensitive() {
        let catalog = sample();
        let query = IndexQuery {
            text: "alp".to_string(),
            ..IndexQuery::new(Grouping::Flat)
        };
        assert_eq!(slugs(&run(Some(&catalog[..]), &query).posts()), vec!["a"]);

        let query = IndexQuery {
            text: "SECOND".to_string(),
            ..IndexQuery::new(Grouping::Flat)
        };
        assert_eq!(slugs(&run(Some(&catalog[..]), &query).posts()), vec!["b"]);
    }

    #[test]
    fn test_every_result_contains_query() {
        let catalog = vec![
            post("a", "Rust async", "2024-01-01", ""),
            post("b", "Cooking", "2024-01-02", "A rusty pan"),
            post("c", "Travel", "2024-01-03", "Mountains"),
            post("d", "TRUST issues", "2024-01-04", ""),
        ];
        let results = filter(&catalog, "RuSt");
        assert_eq!(slugs(&results), vec!["a", "b", "d"]);
        for p in results {
            let hay = format!("{} {}", p.title, p.excerpt).to_lowercase();
            assert!(hay.contains("rust"));
        }
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = sample();
        assert_eq!(filter(&catalog, "").len(), catalog.len());
    }

    #[test]
    fn test_sort_is_stable_on_equal_dates() {
        let catalog = vec![
            post("x", "X", "2024-03-01", ""),
            post("y", "Y", "2024-05-01", ""),
            post("z", "Z", "2024-03-01", ""),
            post("w", "W", "2024-03-01T00:00:00", ""),
        ];
        let newest = sort(catalog.iter().collect(), SortOrder::Newest);
        assert_eq!(slugs(&newest), vec!["y", "x", "z", "w"]);

        let oldest = sort(catalog.iter().collect(), SortOrder::Oldest);
        assert_eq!(slugs(&oldest), vec!["x", "z", "w", "y"]);
    }

    #[test]
    fn test_sort_compares_instants_across_offsets() {
        let catalog = vec![
            post("y", "Y", "2024-06-02T01:00:00Z", ""),
            post("x", "X", "2024-06-01T23:30:00-05:00", ""),
        ];
        assert_eq!(
            slugs(&sort(catalog.iter().collect(), SortOrder::Newest)),
            vec!["x", "y"]
        );
        assert_eq!(
            slugs(&sort(catalog.iter().collect(), SortOrder::Oldest)),
            vec!["y", "x"]
        );
    }

    #[test]
    fn test_undated_posts_sort_last() {
        let catalog = vec![
            post("u", "Undated", "soon", ""),
            post("a", "A", "2023-01-01", ""),
            post("b", "B", "2024-01-01", ""),
        ];
        assert_eq!(
            slugs(&sort(catalog.iter().collect(), SortOrder::Newest)),
            vec!["b", "a", "u"]
        );
        assert_eq!(
            slugs(&sort(catalog.iter().collect(), SortOrder::Oldest)),
            vec!["a", "b", "u"]
        );
    }

    #[test]
    fn test_not_loaded_vs_no_results() {
        let query = IndexQuery::default();
        assert_eq!(run(None, &query), Outcome::NotLoaded);
        assert_eq!(run(Some(&[][..]), &query), Outcome::NoResults);

        let catalog = sample();
        let query = IndexQuery {
            text: "zzz".to_string(),
            ..IndexQuery::default()
        };
        assert_eq!(run(Some(&catalog[..]), &query), Outcome::NoResults);
    }

    #[test]
    fn test_timeline_outcome() {
        let catalog = sample();
        let outcome = run(Some(&catalog[..]), &IndexQuery::new(Grouping::Timeline));
        match outcome {
            Outcome::Timeline(years) => {
                assert_eq!(years.len(), 1);
                assert_eq!(years[0].year, Some(2024));
                assert_eq!(years[0].months[0].label(), "June");
                assert_eq!(years[0].months[1].label(), "January");
            }
            other => panic!("expected timeline, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Newest);
        assert_eq!(SortOrder::Newest.toggled(), SortOrder::Oldest);
        assert_eq!(SortOrder::Oldest.toggled().as_str(), "newest");
    }
}
