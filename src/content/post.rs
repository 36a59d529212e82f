//! Post metadata and body models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::helpers::{parse_post_date, parse_post_instant};

/// One catalog entry, as stored in `posts.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Unique identifier; also the markdown filename stem and URL segment
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date (ISO-ish string, kept as written)
    pub date: String,

    /// Short summary shown on cards
    #[serde(default)]
    pub excerpt: String,

    /// Reading time label, e.g. "3 min read"
    #[serde(
        rename = "readTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub read_time: Option<String>,
}

impl PostMeta {
    /// Create a new entry with minimal required fields
    pub fn new(slug: &str, title: &str, date: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            excerpt: String::new(),
            read_time: None,
        }
    }

    /// Builder-style excerpt setter
    pub fn with_excerpt(mut self, excerpt: &str) -> Self {
        self.excerpt = excerpt.to_string();
        self
    }

    /// Parsed publication date, `None` when the string is not a date
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_post_date(&self.date)
    }

    /// Publication instant used for ordering; offsets are normalized to UTC
    pub fn sort_key(&self) -> Option<NaiveDateTime> {
        parse_post_instant(&self.date)
    }

    /// Read time label, falling back to `default` when absent or blank
    pub fn read_time_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.read_time.as_deref() {
            Some(rt) if !rt.trim().is_empty() => rt,
            _ => default,
        }
    }

    /// Case-insensitive match of an already lowercased needle
    pub fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.title.to_lowercase().contains(needle_lower)
            || self.excerpt.to_lowercase().contains(needle_lower)
    }
}
