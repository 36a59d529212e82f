//! Home view: welcome content followed by the post index

use crate::config::SiteConfig;
use crate::helpers::html_escape;

use super::HOME_INDEX_ID;

/// Welcome block wrapping an already rendered index
pub(super) fn page(config: &SiteConfig, index_html: &str) -> String {
    format!(
        r#"<div class="fade-in">
    <h1>Welcome to {}</h1>
    <p class="intro-text">
        Hi, I'm {}. {}
    </p>
    <div class="divider"></div>
</div>
<div id="{}">{}</div>"#,
        html_escape(&config.title),
        html_escape(&config.author),
        html_escape(&config.intro),
        HOME_INDEX_ID,
        index_html
    )
}
