//! Year -> month grouping for the timeline index

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use super::SortOrder;
use crate::content::PostMeta;
use crate::helpers::month_name;

/// Posts of one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    /// 1-based month, `None` for the undated bucket
    pub month: Option<u32>,
    pub posts: Vec<&'a PostMeta>,
}

impl MonthGroup<'_> {
    pub fn label(&self) -> &'static str {
        self.month.map(month_name).unwrap_or("Undated")
    }
}

/// Posts of one calendar year, split by month
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    /// `None` for posts whose date could not be parsed
    pub year: Option<i32>,
    pub months: Vec<MonthGroup<'a>>,
}

impl YearGroup<'_> {
    pub fn label(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => "Undated".to_string(),
        }
    }
}

/// Group an already sorted sequence by year, then month.
///
/// Years and months are emitted in the direction of `order`; months are
/// ordered through a synthetic date on the 1st of each month. Posts keep
/// their relative order inside a month, and undated posts form one
/// trailing group. Buckets use the wall-clock date a post was written
/// with, so a timestamp near midnight stays in the month shown on its card.
pub fn group_timeline<'a>(sorted: &[&'a PostMeta], order: SortOrder) -> Vec<YearGroup<'a>> {
    let mut years: BTreeMap<i32, BTreeMap<NaiveDate, Vec<&'a PostMeta>>> = BTreeMap::new();
    let mut undated: Vec<&'a PostMeta> = Vec::new();

    for &post in sorted {
        let Some(date) = post.parsed_date() else {
            undated.push(post);
            continue;
        };
        let anchor = NaiveDate::from_ymd_opt(2000, date.month(), 1);
        match anchor {
            Some(anchor) => years
                .entry(date.year())
                .or_default()
                .entry(anchor)
                .or_default()
                .push(post),
            None => undated.push(post),
        }
    }

    let build = |(year, months): (i32, BTreeMap<NaiveDate, Vec<&'a PostMeta>>)| {
        let months = months
            .into_iter()
            .map(|(anchor, posts)| MonthGroup {
                month: Some(anchor.month()),
                posts,
            });
        let months = match order {
            SortOrder::Newest => months.rev().collect(),
            SortOrder::Oldest => months.collect(),
        };
        YearGroup {
            year: Some(year),
            months,
        }
    };

    let mut groups: Vec<YearGroup<'a>> = match order {
        SortOrder::Newest => years.into_iter().rev().map(build).collect(),
        SortOrder::Oldest => years.into_iter().map(build).collect(),
    };

    if !undated.is_empty() {
        groups.push(YearGroup {
            year: None,
            months: vec![MonthGroup {
                month: None,
                posts: undated,
            }],
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sort;

    fn post(slug: &str, date: &str) -> PostMeta {
        PostMeta::new(slug, slug, date)
    }

    fn flatten(groups: &[YearGroup]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|y| y.months.iter())
            .flat_map(|m| m.posts.iter().map(|p| p.slug.clone()))
            .collect()
    }

    fn catalog() -> Vec<PostMeta> {
        vec![
            post("dec23", "2023-12-24"),
            post("jan24", "2024-01-15"),
            post("jun24a", "2024-06-01"),
            post("mar24", "2024-03-10"),
            post("jun24b", "2024-06-20"),
            post("jun24c", "2024-06-01"),
            post("nodate", "tbd"),
        ]
    }

    #[test]
    fn test_groups_newest_first() {
        let catalog = catalog();
        let sorted = sort(catalog.iter().collect(), SortOrder::Newest);
        let groups = group_timeline(&sorted, SortOrder::Newest);

        let years: Vec<String> = groups.iter().map(|g| g.label()).collect();
        assert_eq!(years, vec!["2024", "2023", "Undated"]);

        let months: Vec<&str> = groups[0].months.iter().map(|m| m.label()).collect();
        assert_eq!(months, vec!["June", "March", "January"]);

        let june: Vec<&str> = groups[0].months[0]
            .posts
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(june, vec!["jun24b", "jun24a", "jun24c"]);
    }

    #[test]
    fn test_groups_oldest_first() {
        let catalog = catalog();
        let sorted = sort(catalog.iter().collect(), SortOrder::Oldest);
        let groups = group_timeline(&sorted, SortOrder::Oldest);

        let years: Vec<String> = groups.iter().map(|g| g.label()).collect();
        assert_eq!(years, vec!["2023", "2024", "Undated"]);
        let months: Vec<&str> = groups[1].months.iter().map(|m| m.label()).collect();
        assert_eq!(months, vec!["January", "March", "June"]);
    }

    #[test]
    fn test_partition_without_loss_or_duplication() {
        let catalog = catalog();
        for order in [SortOrder::Newest, SortOrder::Oldest] {
            let sorted = sort(catalog.iter().collect(), order);
            let groups = group_timeline(&sorted, order);
            let expected: Vec<String> = sorted.iter().map(|p| p.slug.clone()).collect();
            assert_eq!(flatten(&groups), expected);
        }
    }

    #[test]
    fn test_same_month_different_years_stay_apart() {
        let catalog = vec![post("a", "2024-05-01"), post("b", "2022-05-01")];
        let sorted = sort(catalog.iter().collect(), SortOrder::Newest);
        let groups = group_timeline(&sorted, SortOrder::Newest);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].months[0].label(), "May");
        assert_eq!(groups[1].months[0].label(), "May");
    }

    #[test]
    fn test_empty_input() {
        assert!(group_timeline(&[], SortOrder::Newest).is_empty());
    }
}
