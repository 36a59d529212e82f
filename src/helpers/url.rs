//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::config::AddressScheme;

/// Characters escaped inside one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Build the in-app href for a route name and optional argument
///
/// # Examples
/// ```ignore
/// route_href(AddressScheme::Path, "post", Some("hello world")) // -> "/post/hello%20world"
/// route_href(AddressScheme::Hash, "posts", None) // -> "#posts"
/// ```
pub fn route_href(scheme: AddressScheme, name: &str, arg: Option<&str>) -> String {
    let prefix = match scheme {
        AddressScheme::Path => "/",
        AddressScheme::Hash => "#",
    };
    match arg {
        Some(arg) => format!("{}{}/{}", prefix, name, encode_segment(arg)),
        None => format!("{}{}", prefix, name),
    }
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Decode a percent-encoded path segment, keeping it as-is when not UTF-8
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com/", "/post/a") // -> "https://example.com/post/a"
/// ```
pub fn full_url_for(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Resolve `href` against the current location and return the in-app
/// location (path, query and fragment) when it stays on the same origin
pub fn same_origin_location(current: &str, href: &str) -> Option<String> {
    let current = Url::parse(current).ok()?;
    let target = current.join(href).ok()?;
    if target.origin() != current.origin() {
        return None;
    }
    Some(location_of(&target))
}

/// Strip scheme and host from an absolute URL; other input is returned as-is
pub fn in_app_location(url: &str) -> String {
    match Url::parse(url) {
        Ok(url) => location_of(&url),
        Err(_) => url.to_string(),
    }
}

fn location_of(url: &Url) -> String {
    let mut location = url.path().to_string();
    if let Some(query) = url.query() {
        location.push('?');
        location.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        location.push('#');
        location.push_str(fragment);
    }
    location
}
