//! List catalog entries through the index engine

use anyhow::Result;

use crate::config::Grouping;
use crate::engine::{self, IndexQuery, Outcome, SortOrder};
use crate::Folio;

/// Print the catalog filtered by `query`, flat or grouped by year and month
pub fn run(folio: &Folio, query: &str, oldest: bool, timeline: bool) -> Result<()> {
    let posts = super::read_catalog(folio)?;

    let query = IndexQuery {
        text: query.to_string(),
        sort: if oldest {
            SortOrder::Oldest
        } else {
            SortOrder::Newest
        },
        grouping: if timeline {
            Grouping::Timeline
        } else {
            Grouping::Flat
        },
    };

    match engine::run(Some(&posts[..]), &query) {
        Outcome::NotLoaded => {}
        Outcome::NoResults => println!("No posts found."),
        Outcome::Flat(found) => {
            println!("Posts ({}):", found.len());
            for post in found {
                println!("  {} - {} [{}]", post.date, post.title, post.slug);
            }
        }
        Outcome::Timeline(years) => {
            for year in years {
                println!("{}", year.label());
                for month in &year.months {
                    println!("  {}", month.label());
                    for post in &month.posts {
                        println!("    {} - {} [{}]", post.date, post.title, post.slug);
                    }
                }
            }
        }
    }

    Ok(())
}
