//! Route descriptors and location parsing

use crate::config::{AddressScheme, IndexConfig};
use crate::helpers::{decode_segment, route_href};

/// Resolved view for a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Index(IndexConfig),
    Post(String),
}

/// Outcome of parsing a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    /// Location the visible URL should be normalized to, if any
    pub normalize: Option<String>,
}

impl Route {
    /// Parse an in-app location (`/post/a`, `/#post/a`, `?q#posts`, ...).
    ///
    /// Unknown route names resolve to [`Route::Home`]; the root location does
    /// too, and additionally asks for the URL to be normalized.
    pub fn parse(location: &str, scheme: AddressScheme, index: IndexConfig) -> Resolved {
        let raw = match scheme {
            AddressScheme::Path => location
                .split(['?', '#'])
                .next()
                .unwrap_or_default(),
            AddressScheme::Hash => location
                .split_once('#')
                .map(|(_, fragment)| fragment)
                .unwrap_or_default(),
        };

        let mut segments = raw.split('/').filter(|s| !s.is_empty());
        let Some(name) = segments.next() else {
            // Hash locations also drop a stray last path segment (`/posts`
            // becomes `/#home`) but stay inside the directory the app is
            // served from.
            let normalize = match scheme {
                AddressScheme::Path => route_href(scheme, "home", None),
                AddressScheme::Hash => format!("./{}", route_href(scheme, "home", None)),
            };
            return Resolved {
                route: Route::Home,
                normalize: Some(normalize),
            };
        };

        let route = match name {
            "home" => Route::Home,
            "posts" | "blog" => Route::Index(index),
            "post" => match segments.next() {
                Some(slug) => Route::Post(decode_segment(slug)),
                None => Route::Index(index),
            },
            other => {
                tracing::debug!("Unknown route {:?}, falling back to home", other);
                Route::Home
            }
        };

        Resolved {
            route,
            normalize: None,
        }
    }

    /// Canonical route name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Index(_) => "posts",
            Route::Post(_) => "post",
        }
    }

    /// Full in-app href of this route
    pub fn href(&self, scheme: AddressScheme) -> String {
        match self {
            Route::Post(slug) => route_href(scheme, self.name(), Some(slug)),
            _ => route_href(scheme, self.name(), None),
        }
    }

    /// Href a primary nav link must carry to be marked active for this route
    pub fn nav_href(&self, scheme: AddressScheme) -> String {
        route_href(scheme, self.name(), None)
    }

    /// Whether the view embeds the live index
    pub fn has_index(&self) -> bool {
        matches!(self, Route::Home | Route::Index(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(location: &str) -> Resolved {
        Route::parse(location, AddressScheme::Path, IndexConfig::default())
    }

    fn parse_hash(location: &str) -> Resolved {
        Route::parse(location, AddressScheme::Hash, IndexConfig::default())
    }

    #[test]
    fn test_root_is_home_and_normalized() {
        let resolved = parse("/");
        assert_eq!(resolved.route, Route::Home);
        assert_eq!(resolved.normalize.as_deref(), Some("/home"));

        let resolved = parse_hash("/");
        assert_eq!(resolved.route, Route::Home);
        assert_eq!(resolved.normalize.as_deref(), Some("./#home"));

        let resolved = parse_hash("/#");
        assert_eq!(resolved.normalize.as_deref(), Some("./#home"));
    }

    #[test]
    fn test_hash_root_with_path_is_normalized() {
        let resolved = parse_hash("/posts");
        assert_eq!(resolved.route, Route::Home);
        assert_eq!(resolved.normalize.as_deref(), Some("./#home"));

        let resolved = parse_hash("/posts#post/a");
        assert_eq!(resolved.route, Route::Post("a".to_string()));
        assert_eq!(resolved.normalize, None);
    }

    #[test]
    fn test_known_routes() {
        let index = Route::Index(IndexConfig::default());
        assert_eq!(parse("/home").route, Route::Home);
        assert_eq!(parse("/posts").route, index);
        assert_eq!(parse("/blog/").route, index);
        assert_eq!(parse("/post/hello").route, Route::Post("hello".to_string()));
        assert_eq!(parse("/post").route, index);
        assert!(parse("/posts").normalize.is_none());
    }

    #[test]
    fn test_unknown_route_is_home() {
        let resolved = parse("/nowhere/else");
        assert_eq!(resolved.route, Route::Home);
        assert!(resolved.normalize.is_none());
    }

    #[test]
    fn test_query_and_fragment_ignored_in_path_scheme() {
        assert_eq!(
            parse("/post/a?ref=feed#comments").route,
            Route::Post("a".to_string())
        );
    }

    #[test]
    fn test_hash_scheme() {
        assert_eq!(
            parse_hash("/#post/hello%20world").route,
            Route::Post("hello world".to_string())
        );
        assert_eq!(
            parse_hash("/anything#blog").route,
            Route::Index(IndexConfig::default())
        );
        assert_eq!(parse_hash("/posts").route, Route::Home);
    }

    #[test]
    fn test_hrefs() {
        let post = Route::Post("a b".to_string());
        assert_eq!(post.href(AddressScheme::Path), "/post/a%20b");
        assert_eq!(post.nav_href(AddressScheme::Path), "/post");
        assert_eq!(Route::Home.href(AddressScheme::Hash), "#home");
        assert!(Route::Home.has_index());
        assert!(!post.has_index());
    }
}
