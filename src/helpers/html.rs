//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag for an in-app link
///
/// # Examples
/// ```ignore
/// link_to("/post/hello", "Hello", Some("read-more")) // -> <a href="/post/hello" class="read-more">Hello</a>
/// ```
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            html_escape(href),
            class,
            text
        ),
        None => format!(r#"<a href="{}">{}</a>"#, html_escape(href), text),
    }
}

/// Loading placeholder
pub fn loading(text: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, text)
}
